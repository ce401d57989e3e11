#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, User};
    use crate::state::auth::AuthState;
    use crate::state::session::{Session, SessionStore};
    use crate::utils::navigation::{NavigationMode, Navigator};
    use crate::utils::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};
    use leptos::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub type NavigationLog = Rc<RefCell<Vec<(NavigationMode, String)>>>;

    pub fn sample_session() -> Session {
        Session {
            email: "a@b.com".into(),
            token: "T".into(),
        }
    }

    pub fn sample_user(id: &str) -> User {
        User {
            id: id.into(),
            email: format!("{}@example.com", id),
            name: format!("User {}", id),
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 10, 30, 0).unwrap(),
        }
    }

    pub fn provide_auth(
        session: Option<Session>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState { session });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    /// Provides an in-memory session store and an API client bound to it, so
    /// nothing touches `window.localStorage`.
    pub fn provide_memory_session(session: Option<Session>) -> SessionStore {
        let store = SessionStore::new(MemoryStorage::new());
        if let Some(session) = session {
            store.save(&session).unwrap();
        }
        provide_context(store.clone());
        provide_context(
            ApiClient::new_with_base_url("http://unrouted.test").with_session_store(store.clone()),
        );
        store
    }

    /// Provides a navigator that records every navigation instead of
    /// leaving the page.
    pub fn provide_recording_navigator(log: &NavigationLog) {
        let sink = log.clone();
        provide_context(Navigator::new(move |mode, path| {
            sink.borrow_mut().push((mode, path.to_string()));
        }));
    }
}
