use crate::{
    api::{ApiClient, ApiError, Credentials, SignUpResponse},
    pages::login::repository::LoginRepository,
    state::session::{Session, SessionStore},
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn email(&self) -> Option<String> {
        self.session.as_ref().map(|session| session.email.clone())
    }
}

/// The store shared by the auth context and the API client.
pub fn use_session_store() -> SessionStore {
    match use_context::<SessionStore>() {
        Some(store) => store,
        None => {
            let store = use_context::<ApiClient>()
                .map(|client| client.session_store().clone())
                .unwrap_or_else(SessionStore::browser);
            provide_context(store.clone());
            store
        }
    }
}

fn create_auth_context(store: &SessionStore) -> AuthContext {
    create_signal(AuthState {
        session: store.load(),
    })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = use_session_store();
    if use_context::<ApiClient>().is_none() {
        provide_context(ApiClient::new().with_session_store(store.clone()));
    }
    let ctx = create_auth_context(&store);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn sign_in_request(
    credentials: Credentials,
    repo: &LoginRepository,
    store: &SessionStore,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    let response = repo.sign_in(&credentials).await?;
    let session = Session {
        email: credentials.email,
        token: response.token,
    };
    store.save(&session).map_err(ApiError::unknown)?;
    log::info!("signed in as {}", session.email);
    set_auth_state.update(|state| state.session = Some(session.clone()));
    Ok(session)
}

pub async fn sign_up_request(
    credentials: Credentials,
    repo: &LoginRepository,
) -> Result<SignUpResponse, ApiError> {
    let response = repo.sign_up(&credentials).await?;
    log::info!("created account {}", response.user_id);
    Ok(response)
}

pub fn log_out(store: &SessionStore, set_auth_state: WriteSignal<AuthState>) {
    store.clear();
    set_auth_state.update(|state| state.session = None);
    log::info!("signed out");
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>()
        .unwrap_or_else(|| ApiClient::new().with_session_store(use_session_store()));
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_sign_in_action() -> Action<Credentials, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let store = use_session_store();
    let repo = login_repository();

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        let store = store.clone();
        async move { sign_in_request(payload, &repo, &store, set_auth).await }
    })
}

pub fn use_sign_up_action() -> Action<Credentials, Result<SignUpResponse, ApiError>> {
    let repo = login_repository();

    create_action(move |credentials: &Credentials| {
        let payload = credentials.clone();
        let repo = repo.clone();
        async move { sign_up_request(payload, &repo).await }
    })
}
