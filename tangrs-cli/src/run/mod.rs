pub mod cli;
pub mod handlers;
pub mod executor;
