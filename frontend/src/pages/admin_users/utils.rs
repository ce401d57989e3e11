use crate::api::{User, UserField};

/// Echoes a keystroke into the local row before anything is sent.
pub fn apply_local_edit(rows: &mut [User], id: &str, field: UserField, value: &str) {
    if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
        match field {
            UserField::Email => row.email = value.to_string(),
            UserField::Name => row.name = value.to_string(),
        }
    }
}

pub fn field_value(user: &User, field: UserField) -> &str {
    match field {
        UserField::Email => &user.email,
        UserField::Name => &user.name,
    }
}

/// The delete prompt. A user id only leaves this state through `confirm`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pending: Option<String>,
}

impl DeleteConfirmation {
    pub fn request(&mut self, id: impl Into<String>) {
        self.pending = Some(id.into());
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn confirm(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}
