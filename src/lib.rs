pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod latex;
pub mod presentation;
pub mod registry;
pub mod settings;
pub mod stats;
pub mod syntax;
pub mod tokenizer;
pub mod watch;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
