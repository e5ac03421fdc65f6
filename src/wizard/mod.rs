//! Brand wizard core
//!
//! Owns step sequencing and gates forward progress on per-step completion.
//! Rendering and content generation live elsewhere; they talk to this module
//! through `update_data`, `advance`, `retreat` and `reset`.
//!
//! ## Architecture
//!
//! ```text
//! WizardController
//!   ├── WizardState (current step index, BrandRecord)
//!   ├── StepDefinition (static, ordered, with completion checks)
//!   ├── ValidationError (advance blocked)
//!   └── FillTicket / PendingTask (delayed fills, discarded once stale)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use brandforge::wizard::{Advance, BrandPatch, WizardController};
//!
//! let mut wizard = WizardController::brand();
//! assert!(wizard.advance().is_err());
//!
//! wizard.update_data(BrandPatch::new().vision("x".repeat(60)));
//! assert_eq!(wizard.advance(), Ok(Advance::Moved(1)));
//! ```

pub mod controller;
pub mod error;
pub mod record;
pub mod steps;
pub mod task;

pub use controller::{Advance, Retreat, WizardController, WizardState};
pub use error::ValidationError;
pub use record::{BrandPatch, BrandRecord, ColorSet, FontPair};
pub use steps::{brand_steps, StepDefinition, BRAND_STEPS, MIN_VISION_CHARS};
pub use task::{FillTicket, PendingTask};
