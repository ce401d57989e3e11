use super::utils::{sign_up_message, LoginFormState};
use crate::api::{ApiError, Credentials, SignUpResponse};
use crate::state::{auth, session::Session};
use crate::utils::navigation::{use_navigator, Navigator, ADMIN_PATH};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginFormState>,
    pub message: RwSignal<Option<String>>,
    pub sign_in_action: Action<Credentials, Result<Session, ApiError>>,
    pub sign_up_action: Action<Credentials, Result<SignUpResponse, ApiError>>,
    pub pending: Signal<bool>,
}

impl LoginViewModel {
    /// Validates the form and returns the credentials to send, or shows the
    /// validation message and returns `None`.
    fn take_credentials(&self) -> Option<Credentials> {
        if self.pending.get_untracked() {
            return None;
        }
        match self.form.get_untracked().to_credentials() {
            Ok(credentials) => {
                self.message.set(None);
                Some(credentials)
            }
            Err(msg) => {
                self.message.set(Some(msg));
                None
            }
        }
    }

    pub fn sign_in(&self) {
        if let Some(credentials) = self.take_credentials() {
            self.sign_in_action.dispatch(credentials);
        }
    }

    pub fn sign_up(&self) {
        if let Some(credentials) = self.take_credentials() {
            self.sign_up_action.dispatch(credentials);
        }
    }
}

/// A successful sign-in leaves for the admin landing; a failure stays on the
/// form with the error text.
pub fn apply_sign_in_result(
    result: Result<Session, ApiError>,
    message: RwSignal<Option<String>>,
    navigator: &Navigator,
) {
    match result {
        Ok(_) => navigator.redirect(ADMIN_PATH),
        Err(err) => message.set(Some(err.error)),
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = create_rw_signal(LoginFormState::default());
    let message = create_rw_signal(None::<String>);
    let sign_in_action = auth::use_sign_in_action();
    let sign_up_action = auth::use_sign_up_action();
    let sign_in_pending = sign_in_action.pending();
    let sign_up_pending = sign_up_action.pending();
    let pending = Signal::derive(move || sign_in_pending.get() || sign_up_pending.get());

    let navigator = use_navigator();
    create_effect(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            apply_sign_in_result(result, message, &navigator);
        }
    });

    create_effect(move |_| {
        if let Some(result) = sign_up_action.value().get() {
            match result {
                Ok(response) => message.set(Some(sign_up_message(&response))),
                Err(err) => message.set(Some(err.error)),
            }
        }
    });

    LoginViewModel {
        form,
        message,
        sign_in_action,
        sign_up_action,
        pending,
    }
}
