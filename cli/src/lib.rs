pub mod commands;
pub mod config;
pub mod console;
pub mod context;
pub mod logging;
pub mod pack_watcher;
pub mod repl;

pub use context::CliContext;
pub use repl::readline;
