use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use components::guard::RequireSession;
use pages::{
    admin_home::AdminHomePage, admin_user_logs::AdminUserLogsPage,
    admin_users::AdminUsersPage, login::LoginPage,
};
use state::auth::AuthProvider;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting admin console");

    // window.__ADMIN_CONSOLE_ENV wins over ./config.json when present.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
    });

    mount_to_body(App);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Admin Console"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/admin" view=ProtectedAdminHome/>
                    <Route path="/admin/users" view=ProtectedAdminUsers/>
                    <Route path="/admin/userlogs" view=ProtectedAdminUserLogs/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedAdminHome() -> impl IntoView {
    view! { <RequireSession><AdminHomePage/></RequireSession> }
}

#[component]
fn ProtectedAdminUsers() -> impl IntoView {
    view! { <RequireSession><AdminUsersPage/></RequireSession> }
}

#[component]
fn ProtectedAdminUserLogs() -> impl IntoView {
    view! { <RequireSession><AdminUserLogsPage/></RequireSession> }
}
