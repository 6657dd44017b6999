pub mod handlers;
pub mod mock;
pub mod prompts;
