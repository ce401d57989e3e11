use crate::{
    state::auth::{use_auth, use_session_store, AuthState},
    utils::navigation::{use_navigator, LOGIN_PATH},
};
use leptos::*;

/// Renders `children` only while a session is stored; otherwise sends the
/// browser back to the login view straight away.
///
/// Storage is read again on every mount, since in-app links reach protected
/// routes without reloading the page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let store = use_session_store();
    let navigator = use_navigator();

    let stored = store.load();
    if auth.with_untracked(|state| state.session != stored) {
        set_auth.set(AuthState { session: stored });
    }

    let has_session = create_memo(move |_| auth.with(AuthState::is_authenticated));
    if !has_session.get_untracked() {
        navigator.replace(LOGIN_PATH);
    }

    // Later sign-outs while mounted.
    create_effect(move |previous: Option<bool>| {
        let signed_in = has_session.get();
        if previous.is_some() && !signed_in {
            navigator.replace(LOGIN_PATH);
        }
        signed_in
    });

    view! {
        <Show when=move || has_session.get()>
            {children()}
        </Show>
    }
}
