pub mod admin;
pub mod auth;
pub mod portal;
pub mod uploads;
