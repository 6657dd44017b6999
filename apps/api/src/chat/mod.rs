pub mod handlers;
pub mod personas;
