// src/lib.rs
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod merger;
pub mod output;
pub mod prompter;
pub mod runner;
pub mod session;
pub mod types;

pub use cli::Args;
pub use config::ConfigStore;
pub use engine::{RunOutcome, SubenumEngine};
pub use merger::ResultMerger;
pub use prompter::Prompter;
pub use runner::{ProcessRunner, SystemRunner, ToolRunner};
pub use session::{ping_domain, Session};
pub use types::{Completion, Settings, SubenumError, Tool, ToolInvocation, WordlistConfig};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
