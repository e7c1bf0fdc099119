pub mod auth;
pub mod groups;
pub mod source;
pub mod users;
