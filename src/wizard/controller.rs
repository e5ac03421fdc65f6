//! Step sequencing with validation gating
//!
//! Manages navigation through the wizard steps and owns the brand data.

use tracing::{debug, info};

use super::error::ValidationError;
use super::record::{BrandPatch, BrandRecord};
use super::steps::{brand_steps, StepDefinition};
use super::task::FillTicket;

/// Current position plus collected data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    pub current_step_index: usize,
    pub data: BrandRecord,
}

/// Outcome of a successful `advance()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward, now on this index
    Moved(usize),
    /// Already on the last step; nothing changed
    Finished,
}

/// Outcome of `retreat()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved back, now on this index
    Moved(usize),
    /// Was on the first step; the host should leave the wizard
    Exit,
}

/// Wizard state machine.
///
/// States are the step indices `0..step_count`. The only transitions are
/// `advance`, `retreat` and `reset`; there is no jump-to-step.
#[derive(Debug, Clone)]
pub struct WizardController {
    steps: Vec<StepDefinition>,
    state: WizardState,
    /// Bumped whenever the visible step changes, invalidating fill tickets
    generation: u64,
}

impl WizardController {
    /// Create a controller over `steps`, starting at index 0 with default data.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty.
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        assert!(!steps.is_empty(), "a wizard needs at least one step");
        Self {
            steps,
            state: WizardState::default(),
            generation: 0,
        }
    }

    /// Controller over the five BrandForge steps
    pub fn brand() -> Self {
        Self::new(brand_steps())
    }

    pub fn current_index(&self) -> usize {
        self.state.current_step_index
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.steps[self.state.current_step_index]
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn data(&self) -> &BrandRecord {
        &self.state.data
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step_index + 1 == self.steps.len()
    }

    /// Move to the next step if the current one is complete
    pub fn advance(&mut self) -> Result<Advance, ValidationError> {
        if self.is_last_step() {
            return Ok(Advance::Finished);
        }

        let step = self.current_step();
        if !step.is_complete(&self.state.data) {
            debug!(step = step.title, "advance blocked");
            return Err(ValidationError {
                step_id: step.id,
                step_title: step.title,
                requirement: step.requirement,
            });
        }

        self.state.current_step_index += 1;
        self.generation += 1;
        info!(
            step = self.current_step().title,
            index = self.state.current_step_index,
            "advanced"
        );
        Ok(Advance::Moved(self.state.current_step_index))
    }

    /// Move to the previous step; never validates and never clears data
    pub fn retreat(&mut self) -> Retreat {
        self.generation += 1;
        if self.state.current_step_index == 0 {
            info!("retreat from first step, leaving wizard");
            return Retreat::Exit;
        }

        self.state.current_step_index -= 1;
        info!(
            step = self.current_step().title,
            index = self.state.current_step_index,
            "retreated"
        );
        Retreat::Moved(self.state.current_step_index)
    }

    /// Merge a partial record into the collected data
    pub fn update_data(&mut self, patch: BrandPatch) {
        self.state.data.merge(patch);
    }

    /// Back to the first step with a fresh record
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        self.generation += 1;
        info!("wizard reset");
    }

    /// Position as a fraction in `(0, 1]`, for display only
    pub fn progress_fraction(&self) -> f64 {
        (self.state.current_step_index + 1) as f64 / self.steps.len() as f64
    }

    /// Ticket for a delayed fill started on the current step visit
    pub fn begin_fill(&self) -> FillTicket {
        FillTicket {
            generation: self.generation,
            step_index: self.state.current_step_index,
        }
    }

    /// True while `ticket` still refers to the current step visit
    pub fn is_current(&self, ticket: FillTicket) -> bool {
        ticket.generation == self.generation
            && ticket.step_index == self.state.current_step_index
    }

    /// Merge a delayed fill if its ticket is still current.
    ///
    /// Returns `false` and drops the patch when the user has since moved to
    /// another step or reset the wizard.
    pub fn apply_fill(&mut self, ticket: FillTicket, patch: BrandPatch) -> bool {
        if !self.is_current(ticket) {
            debug!(
                ticket_step = ticket.step_index,
                current_step = self.state.current_step_index,
                "discarding stale fill"
            );
            return false;
        }
        self.update_data(patch);
        true
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::brand()
    }
}
