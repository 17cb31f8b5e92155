//! Profile dialog: the signed-in user's own account and, for superusers, a
//! user-management tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the sidebar. Reads `AuthState` for the current user id and role
//! and reports outcomes through the shared toast. Deleting your own account or
//! logging out goes through `on_logout`, which the dashboard wires to the
//! logout route.

use leptos::prelude::*;

use crate::net::types::{UpdateUserRequest, UserProfile};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::state::users::{ROLE_OPTIONS, STATUS_OPTIONS, filter_users, full_name};
use crate::state::wallet::parse_amount;
use crate::util::browser::confirm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Mine,
    Users,
}

#[component]
pub fn ProfileModal(on_close: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(ProfileTab::Mine);
    let is_superuser = move || auth.get().is_superuser();

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    let tab_class = move |t: ProfileTab| {
        if tab.get() == t {
            "tabs__tab tabs__tab--active"
        } else {
            "tabs__tab"
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--wide dialog--scroll"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="tabs">
                    <button class=move || tab_class(ProfileTab::Mine) on:click=move |_| tab.set(ProfileTab::Mine)>
                        "My Profile"
                    </button>
                    <Show when=is_superuser>
                        <button
                            class=move || tab_class(ProfileTab::Users)
                            on:click=move |_| tab.set(ProfileTab::Users)
                        >
                            "User Management"
                        </button>
                    </Show>
                </div>
                {move || match tab.get() {
                    ProfileTab::Users if auth.get_untracked().is_superuser() => view! { <UserManagementTab/> }.into_any(),
                    _ => view! { <MyProfileTab on_logout=on_logout/> }.into_any(),
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=on_close_click>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

// =============================================================
// My profile
// =============================================================

#[component]
fn MyProfileTab(on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let user_id = auth.get_untracked().user_id();

    let profile = RwSignal::new(None::<UserProfile>);
    let form = RwSignal::new(UserProfile::default());
    let password = RwSignal::new(String::new());
    let editing = RwSignal::new(false);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(id) = user_id {
            match crate::net::api::fetch_user(id).await {
                Ok(user) => {
                    let _ = form.try_set(user.clone());
                    let _ = profile.try_set(Some(user));
                }
                Err(e) => {
                    log::warn!("profile load failed for user {id}: {e}");
                    toast.update(|t| t.show_error(e.user_message("Failed to load user data")));
                }
            }
        }
        let _ = loading.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let on_edit = move |_| {
        if let Some(current) = profile.get_untracked() {
            form.set(current);
        }
        password.set(String::new());
        editing.set(true);
    };
    let on_cancel = move |_| {
        if let Some(current) = profile.get_untracked() {
            form.set(current);
        }
        password.set(String::new());
        editing.set(false);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = user_id else {
            return;
        };
        let edited = form.get_untracked();
        let request = UpdateUserRequest::from_profile(&edited, &password.get_untracked());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user(id, &request).await {
                Ok(()) => {
                    rename_session_user(auth, &edited.name);
                    profile.set(Some(edited));
                    password.set(String::new());
                    editing.set(false);
                    toast.update(|t| t.show_success("Profile updated successfully"));
                }
                Err(e) => toast.update(|t| t.show_error(e.user_message("Failed to update profile"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, edited, request, toast);
        }
    };

    let on_delete_account = move |_| {
        let Some(id) = user_id else {
            return;
        };
        if !confirm("Are you sure you want to delete your account? This cannot be undone.") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(id).await {
                Ok(()) => {
                    log::info!("user {id} deleted their account");
                    on_logout.run(());
                }
                Err(e) => toast.update(|t| t.show_error(e.user_message("Failed to delete account"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }>
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <ProfileSummary profile=profile/>
                        <div class="dialog__actions dialog__actions--start">
                            <button class="btn btn--primary" on:click=on_edit disabled=move || profile.get().is_none()>
                                "Edit Profile"
                            </button>
                            <button class="btn" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                            <button class="btn btn--danger" on:click=on_delete_account>
                                "Delete Account"
                            </button>
                        </div>
                    }
                }
            >
                <form class="dialog__form" on:submit=on_save>
                    <ProfileFields form=form/>
                    <label class="dialog__label">
                        "New Password"
                        <input
                            class="dialog__input"
                            type="password"
                            placeholder="Leave blank to keep current"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Account Status"
                            <input class="dialog__input" disabled prop:value=move || form.get().account_status/>
                        </label>
                        <label class="dialog__label">
                            "Role"
                            <input class="dialog__input" disabled prop:value=move || form.get().role/>
                        </label>
                    </div>
                    <div class="dialog__actions dialog__actions--start">
                        <button class="btn btn--primary" type="submit">
                            "Save Changes"
                        </button>
                        <button class="btn" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </Show>
    }
}

#[component]
fn ProfileSummary(profile: RwSignal<Option<UserProfile>>) -> impl IntoView {
    let field = move |f: fn(&UserProfile) -> String| {
        move || {
            profile
                .get()
                .as_ref()
                .map(f)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "—".to_owned())
        }
    };

    view! {
        <dl class="profile">
            <dt>"Name"</dt>
            <dd>{field(full_name)}</dd>
            <dt>"Email"</dt>
            <dd>{field(|u| u.email.clone())}</dd>
            <dt>"Phone"</dt>
            <dd>{field(|u| u.contact_number.clone())}</dd>
            <dt>"Status"</dt>
            <dd>{field(|u| u.account_status.clone())}</dd>
            <dt>"Role"</dt>
            <dd>{field(|u| u.role.clone())}</dd>
        </dl>
    }
}

/// Name, surname, email and contact inputs bound to `form`.
#[component]
fn ProfileFields(form: RwSignal<UserProfile>) -> impl IntoView {
    view! {
        <div class="dialog__row">
            <label class="dialog__label">
                "First Name"
                <input
                    class="dialog__input"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Last Name"
                <input
                    class="dialog__input"
                    prop:value=move || form.get().surname
                    on:input=move |ev| form.update(|f| f.surname = event_target_value(&ev))
                />
            </label>
        </div>
        <label class="dialog__label">
            "Email"
            <input
                class="dialog__input"
                type="email"
                prop:value=move || form.get().email
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
        </label>
        <label class="dialog__label">
            "Phone Number"
            <input
                class="dialog__input"
                type="tel"
                prop:value=move || form.get().contact_number
                on:input=move |ev| form.update(|f| f.contact_number = event_target_value(&ev))
            />
        </label>
    }
}

/// Keep the sidebar greeting in step with an edited first name.
#[cfg(feature = "hydrate")]
fn rename_session_user(auth: RwSignal<AuthState>, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    auth.update(|a| {
        if let Some(session) = a.session.as_mut() {
            session.user.name = name.to_owned();
            crate::util::session::save_session(session);
        }
    });
}

// =============================================================
// User management (superuser)
// =============================================================

#[component]
fn UserManagementTab() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let users = RwSignal::new(Vec::<UserProfile>::new());
    let query = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<UserProfile>);
    let funding = RwSignal::new(None::<UserProfile>);

    let reload = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Ok(list) => {
                    let _ = error.try_set(None);
                    let _ = users.try_set(list);
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message("Failed to load users. Please try again.")));
                    toast.update(|t| t.show_error("Failed to load users"));
                }
            }
            let _ = loading.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (users, error, toast);
            loading.set(false);
        }
    };
    reload();

    let on_delete = Callback::new(move |user: UserProfile| {
        if !confirm("Are you sure you want to delete this user?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(user.user_id).await {
                Ok(()) => {
                    log::info!("deleted user {}", user.user_id);
                    toast.update(|t| t.show_success("User deleted successfully"));
                    reload();
                }
                Err(e) => toast.update(|t| t.show_error(e.user_message("Failed to delete user"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    });
    let on_saved = Callback::new(move |()| {
        editing.set(None);
        funding.set(None);
        reload();
    });
    let on_dismiss = Callback::new(move |()| {
        editing.set(None);
        funding.set(None);
    });

    let visible = move || filter_users(&users.get(), &query.get());

    view! {
        <div class="user-admin">
            <input
                class="dialog__input"
                type="search"
                placeholder="Search by name, email or phone"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            {move || {
                if loading.get() {
                    view! { <div class="spinner" aria-label="Loading"></div> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <p class="dialog__error">{message}</p> }.into_any()
                } else {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Phone"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=visible
                                    key=|u| u.user_id
                                    children=move |user: UserProfile| {
                                        let edit_user = user.clone();
                                        let fund_user = user.clone();
                                        let delete_user = user.clone();
                                        view! {
                                            <tr>
                                                <td>{full_name(&user)}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>{user.contact_number.clone()}</td>
                                                <td><span class="chip">{user.role.clone()}</span></td>
                                                <td><span class="chip">{user.account_status.clone()}</span></td>
                                                <td class="table__actions">
                                                    <button class="btn" on:click=move |_| editing.set(Some(edit_user.clone()))>
                                                        "Edit"
                                                    </button>
                                                    <button class="btn" on:click=move |_| funding.set(Some(fund_user.clone()))>
                                                        "Fund"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete.run(delete_user.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            {move || editing.get().map(|user| view! { <EditUserDialog user=user on_saved=on_saved on_cancel=on_dismiss/> })}
            {move || funding.get().map(|user| view! { <FundUserDialog user=user on_saved=on_saved on_cancel=on_dismiss/> })}
        </div>
    }
}

#[component]
fn EditUserDialog(user: UserProfile, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(user);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let edited = form.get_untracked();
        let request = UpdateUserRequest::from_profile(&edited, "");
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user(edited.user_id, &request).await {
                Ok(()) => {
                    toast.update(|t| t.show_success("User updated successfully"));
                    on_saved.run(());
                }
                Err(e) => toast.update(|t| t.show_error(e.user_message("Failed to update user"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (edited, request, toast, on_saved);
        }
    };

    view! {
        <div class="dialog-backdrop dialog-backdrop--nested" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit User"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <ProfileFields form=form/>
                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Role"
                            <select
                                class="dialog__input"
                                on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                            >
                                {ROLE_OPTIONS
                                    .into_iter()
                                    .map(|role| {
                                        view! {
                                            <option value=role selected=move || form.get().role == role>
                                                {role}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Status"
                            <select
                                class="dialog__input"
                                on:change=move |ev| form.update(|f| f.account_status = event_target_value(&ev))
                            >
                                {STATUS_OPTIONS
                                    .into_iter()
                                    .map(|status| {
                                        view! {
                                            <option value=status selected=move || form.get().account_status == status>
                                                {status}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save Changes"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FundUserDialog(user: UserProfile, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let user_id = user.user_id;
    let name = full_name(&user);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let value = match parse_amount(&amount.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_funds(user_id, value).await {
                Ok(_) => {
                    log::info!("funded wallet of user {user_id} with {value:.2}");
                    toast.update(|t| t.show_success("Funds added successfully"));
                    on_saved.run(());
                }
                Err(e) => {
                    error.set(Some(e.user_message("Failed to add funds")));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, value, toast, on_saved);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop dialog-backdrop--nested" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Fund Wallet"</h2>
                <p>"Add funds for " <strong>{name}</strong></p>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Amount"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0.01"
                            step="0.01"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Add Funds"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
