mod admin_users;
mod auth;
pub mod client;
pub mod types;
mod user_logs;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
