pub mod admin_home;
pub mod admin_user_logs;
pub mod admin_users;
pub mod login;
