pub mod handlers;
pub mod template;
pub mod templates;
