use leptos::*;
use std::rc::Rc;

pub const LOGIN_PATH: &str = "/";
pub const ADMIN_PATH: &str = "/admin";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const ADMIN_USER_LOGS_PATH: &str = "/admin/userlogs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Leaves the current page in history.
    Push,
    /// Replaces the current history entry.
    Replace,
}

/// Full-page navigation. Views take it from context so tests can record
/// where they were sent instead of touching `window.location`.
#[derive(Clone)]
pub struct Navigator {
    go: Rc<dyn Fn(NavigationMode, &str)>,
}

impl Navigator {
    pub fn new(go: impl Fn(NavigationMode, &str) + 'static) -> Self {
        Self { go: Rc::new(go) }
    }

    pub fn browser() -> Self {
        Self::new(|mode, path| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            let result = match mode {
                NavigationMode::Push => location.set_href(path),
                NavigationMode::Replace => location.replace(path),
            };
            if result.is_err() {
                log::warn!("navigation to {} failed", path);
            }
        })
    }

    pub fn redirect(&self, path: &str) {
        (self.go)(NavigationMode::Push, path);
    }

    pub fn replace(&self, path: &str) {
        (self.go)(NavigationMode::Replace, path);
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(Navigator::browser)
}
