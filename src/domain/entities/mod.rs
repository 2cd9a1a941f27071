pub mod gallery_image;
pub mod service;
pub mod site_content;
pub mod submission;
pub mod testimonial;
pub mod token;
