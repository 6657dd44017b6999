pub mod chat;
pub mod project;
