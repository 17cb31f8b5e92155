//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::toast::Toast;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, logout::LogoutPage, register::RegisterPage};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::session::load_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts, restores any stored session once
/// the browser takes over, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toast);

    // Effects only run in the browser, where storage is available.
    Effect::new(move || {
        let state = match load_session() {
            Some(session) => AuthState::signed_in(session),
            None => AuthState::signed_out(),
        };
        auth.set(state);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/kiosk.css"/>
        <Title text="Kiosk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RegisterPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
        <Toast/>
    }
}
