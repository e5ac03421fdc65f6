//! BrandForge: a five-step branding wizard
//!
//! The core is [`wizard::WizardController`], a step-sequencing state machine
//! with per-step validation and an accumulating [`wizard::BrandRecord`].
//! Content generation is a keyword-matched mock behind [`studio::BrandStudio`];
//! the terminal UI and the non-interactive mode live in [`cli`].

pub mod cli;
pub mod report;
pub mod studio;
pub mod utils;
pub mod wizard;
