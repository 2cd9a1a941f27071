pub mod auth;
pub mod contact;
pub mod gallery;
pub mod services;
pub mod site_content;
pub mod submissions;
pub mod system;
pub mod testimonials;
