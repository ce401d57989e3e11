use crate::utils::storage::{BrowserStorage, SessionStorage};
use std::rc::Rc;

const EMAIL_KEY: &str = "email";
const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub token: String,
}

impl Session {
    /// Both parts must be present and non-empty; anything less is no session.
    pub fn from_parts(email: Option<String>, token: Option<String>) -> Option<Self> {
        let email = email.filter(|value| !value.is_empty())?;
        let token = token.filter(|value| !value.is_empty())?;
        Some(Self { email, token })
    }
}

/// Reads and writes the persisted session. Views receive it through context
/// instead of touching storage directly.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    pub fn load(&self) -> Option<Session> {
        Session::from_parts(self.storage.get(EMAIL_KEY), self.storage.get(TOKEN_KEY))
    }

    pub fn save(&self, session: &Session) -> Result<(), String> {
        self.storage.set(EMAIL_KEY, &session.email)?;
        self.storage.set(TOKEN_KEY, &session.token)
    }

    pub fn clear(&self) {
        self.storage.remove(EMAIL_KEY);
        self.storage.remove(TOKEN_KEY);
    }
}
