use crate::{
    state::auth::{log_out, use_auth, use_session_store},
    utils::navigation::{use_navigator, ADMIN_USERS_PATH, ADMIN_USER_LOGS_PATH, LOGIN_PATH},
};
use leptos::*;

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let store = use_session_store();
    let navigator = use_navigator();
    let email = move || auth.get().email().unwrap_or_default();

    let on_logout = move |_| {
        log_out(&store, set_auth);
        navigator.replace(LOGIN_PATH);
    };

    view! {
        <main class="flex h-screen items-center justify-center bg-gray-100">
            <div class="w-full max-w-sm rounded-2xl bg-white p-6 shadow text-center">
                <div class="mb-6 flex items-center justify-center gap-4">
                    <h1 class="text-xl font-semibold">"Welcome " {email}</h1>
                    <button
                        type="button"
                        class="rounded bg-red-500 px-3 py-1 text-white hover:bg-red-600"
                        on:click=on_logout
                    >
                        "Logout"
                    </button>
                </div>
                <nav class="flex flex-col gap-4">
                    <a href=ADMIN_USERS_PATH class="rounded bg-blue-500 p-2 text-white hover:bg-blue-600">
                        "View Users"
                    </a>
                    <a href=ADMIN_USER_LOGS_PATH class="rounded bg-green-500 p-2 text-white hover:bg-green-600">
                        "View User Logs"
                    </a>
                </nav>
            </div>
        </main>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, provide_memory_session, sample_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_home_greets_signed_in_user_and_links_views() {
        let html = render_to_string(move || {
            provide_memory_session(Some(sample_session()));
            provide_auth(Some(sample_session()));
            view! { <AdminHomePage /> }
        });
        assert!(html.contains("a@b.com"));
        assert!(html.contains("href=\"/admin/users\""));
        assert!(html.contains("href=\"/admin/userlogs\""));
        assert!(html.contains("Logout"));
    }
}
