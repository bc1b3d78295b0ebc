pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod output;

pub use context::AppContext;
