//! Bottom-of-screen toast bound to the shared `ToastState`.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[cfg(feature = "hydrate")]
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    // Each new message schedules its own dismissal; `dismiss` ignores stale seqs.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let state = toast.get();
        if state.message.is_none() {
            return;
        }
        let seq = state.seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(DISMISS_AFTER).await;
            let _ = toast.try_update(|t| t.dismiss(seq));
        });
    });

    let on_close = move |_| {
        let seq = toast.get_untracked().seq;
        toast.update(|t| t.dismiss(seq));
    };

    view! {
        <Show when=move || toast.get().message.is_some()>
            <div class=move || format!("toast {}", toast.get().severity.css_modifier()) role="status">
                <span class="toast__message">{move || toast.get().message.unwrap_or_default()}</span>
                <button class="toast__close" title="Dismiss" on:click=on_close>
                    "×"
                </button>
            </div>
        </Show>
    }
}
