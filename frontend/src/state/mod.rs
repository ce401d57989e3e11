pub mod auth;
pub mod listing;
pub mod pager;
pub mod session;
