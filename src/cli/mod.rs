//! CLI module - argument parsing, the TUI wizard and the plain-terminal flow

mod args;
pub mod export;
pub mod headless;
mod prompts;
pub mod screens;
pub mod session;
pub mod wizard;

pub use args::{Cli, Commands};
pub use export::run_export;
pub use headless::run_headless;
pub use prompts::*;
pub use session::{SessionEvent, WizardSession};
pub use wizard::{run_wizard, WizardResult};
