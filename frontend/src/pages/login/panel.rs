use crate::{
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
    state::auth::use_auth,
    utils::navigation::{use_navigator, ADMIN_PATH},
};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let vm = use_login_view_model();
    let navigator = use_navigator();

    // Already signed in: skip the form entirely.
    create_effect(move |_| {
        if auth.get_untracked().is_authenticated() {
            navigator.replace(ADMIN_PATH);
        }
    });

    view! {
        <LoginForm
            form=vm.form
            message=vm.message.into()
            pending=vm.pending
            on_sign_in=Callback::new(move |_| vm.sign_in())
            on_sign_up=Callback::new(move |_| vm.sign_up())
        />
    }
}
