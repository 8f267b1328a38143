pub mod lead;
pub mod post;
pub mod settings;
pub mod testimonial;
