pub mod auth;
pub mod db;
pub mod limiter;
pub mod mailer;
pub mod utils;
