//! One visit to the interactive wizard, without any terminal I/O
//!
//! `WizardSession` glues the controller, the step screens and the studio
//! together. The TUI feeds it key events and a clock; everything it does is
//! observable through accessors, so it is tested without a terminal.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use super::screens::{
    identity_default_patch, step_cursor, IdentityField, Job, Screens, StepAction,
};
use crate::report::ExportTier;
use crate::studio::{BrandStudio, GenerationDelays};
use crate::wizard::steps::index;
use crate::wizard::{
    Advance, BrandPatch, BrandRecord, FillTicket, PendingTask, Retreat, WizardController,
};

/// What the host should do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Keep showing the wizard
    Continue,
    /// Retreated past the first step; return to the landing screen
    Exit,
    /// User finished on the brand kit step
    Finished(Box<BrandRecord>),
    /// User confirmed quitting the application
    Quit,
}

pub struct WizardSession {
    controller: WizardController,
    screens: Screens,
    studio: Box<dyn BrandStudio>,
    delays: GenerationDelays,
    pending: Vec<PendingTask<Job>>,
    error: Option<String>,
    show_quit_confirm: bool,
}

impl WizardSession {
    pub fn new(studio: Box<dyn BrandStudio>, delays: GenerationDelays) -> Self {
        Self {
            controller: WizardController::brand(),
            screens: Screens::default(),
            studio,
            delays,
            pending: Vec::new(),
            error: None,
            show_quit_confirm: false,
        }
    }

    /// Pre-fill the vision text (from `--vision` or `--pitch-deck`)
    pub fn with_vision(mut self, vision: impl Into<String>) -> Self {
        self.controller
            .update_data(BrandPatch::new().vision(vision.into()));
        self
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn data(&self) -> &BrandRecord {
        self.controller.data()
    }

    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    /// Inline validation message from the last blocked advance
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_quit_confirm(&self) -> bool {
        self.show_quit_confirm
    }

    /// Work in flight for the current step visit
    pub fn active_job(&self) -> Option<&PendingTask<Job>> {
        self.pending
            .iter()
            .find(|t| self.controller.is_current(t.ticket()))
    }

    pub fn is_generating(&self) -> bool {
        self.active_job().is_some()
    }

    // ========================================================================
    // Clock
    // ========================================================================

    /// Land every pending job whose deadline has passed.
    ///
    /// Jobs started on an earlier step visit are dropped. Returns true when
    /// anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (ready, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|t| t.is_ready(now));
        self.pending = waiting;

        let mut changed = false;
        for task in ready {
            let (ticket, job) = task.into_parts();
            if !self.controller.is_current(ticket) {
                debug!(job = job.label(), "dropping stale job");
                continue;
            }
            changed |= self.land(ticket, job);
        }
        changed
    }

    fn land(&mut self, ticket: FillTicket, job: Job) -> bool {
        match job {
            Job::Identities(set) => {
                let patch = identity_default_patch(&set);
                if !self.controller.apply_fill(ticket, patch) {
                    return false;
                }
                info!(count = set.suggestions.len(), "brand suggestions generated");
                let screen = &mut self.screens.identity;
                screen.set = Some(set);
                screen.selected = 0;
            }
            Job::Logos(options) => {
                let patch = options
                    .first()
                    .map(|l| BrandPatch::new().logo_url(l.url.clone()))
                    .unwrap_or_default();
                if !self.controller.apply_fill(ticket, patch) {
                    return false;
                }
                info!(count = options.len(), "logo concepts generated");
                let screen = &mut self.screens.logo;
                screen.options = options;
                screen.selected = 0;
            }
            Job::CustomLogo(logo) => {
                let patch = BrandPatch::new().logo_url(logo.url.clone());
                if !self.controller.apply_fill(ticket, patch) {
                    return false;
                }
                info!(id = %logo.id, "custom logo generated");
                let screen = &mut self.screens.logo;
                screen.options.insert(0, logo);
                screen.selected = 0;
                screen.prompt.clear();
            }
            Job::Export(tier) => {
                info!(tier = tier.label(), "brand kit exported");
                self.screens.kit.status = Some(format!(
                    "Brand kit exported as {}!",
                    tier.format().to_uppercase()
                ));
            }
        }
        true
    }

    fn schedule(&mut self, now: Instant, delay: std::time::Duration, job: Job) {
        let ticket = self.controller.begin_fill();
        debug!(job = job.label(), ?delay, "scheduling job");
        self.pending
            .push(PendingTask::schedule(ticket, now, delay, job));
    }

    /// Step-entry hook: generate content the screen does not have yet
    fn enter_step(&mut self, now: Instant) {
        let data = self.controller.data().clone();
        match self.controller.current_index() {
            index::IDENTITY => {
                if self.screens.identity.needs_generation(&data.vision) {
                    self.start_identities(now, data.vision);
                }
            }
            index::PALETTE => {
                if self.screens.palette.needs_generation(&data.tone, &data.industry) {
                    self.regenerate_palettes();
                }
            }
            index::LOGO => {
                if self.screens.logo.options.is_empty() {
                    self.start_logos(now);
                }
            }
            _ => {}
        }
    }

    fn start_identities(&mut self, now: Instant, vision: String) {
        let set = self.studio.identities(&vision);
        let screen = &mut self.screens.identity;
        screen.set = None;
        screen.selected = 0;
        screen.editor = None;
        screen.generated_for = Some(vision);
        self.schedule(now, self.delays.identities, Job::Identities(set));
    }

    fn regenerate_palettes(&mut self) {
        let data = self.controller.data();
        let (tone, industry) = (data.tone.clone(), data.industry.clone());
        let schemes = self.studio.palettes(&tone, &industry);
        let screen = &mut self.screens.palette;
        screen.schemes = schemes;
        screen.selected = 0;
        screen.generated_for = Some((tone, industry));
        if let Some(patch) = screen.selection_patch() {
            self.controller.update_data(patch);
        }
    }

    fn start_logos(&mut self, now: Instant) {
        let options = self.studio.logos();
        self.schedule(now, self.delays.logos, Job::Logos(options));
    }

    // ========================================================================
    // Keys
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> SessionEvent {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return SessionEvent::Continue;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return SessionEvent::Quit;
        }

        if self.show_quit_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return SessionEvent::Quit,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.show_quit_confirm = false;
                }
                _ => {}
            }
            return SessionEvent::Continue;
        }

        // Esc closes an open editor first, otherwise asks to quit
        if key.code == KeyCode::Esc {
            if !self.close_overlay() {
                self.show_quit_confirm = true;
            }
            return SessionEvent::Continue;
        }

        self.error = None;
        let action = match self.controller.current_index() {
            index::VISION => self.handle_vision(key),
            index::IDENTITY => self.handle_identity(key, now),
            index::PALETTE => self.handle_palette(key),
            index::LOGO => self.handle_logo(key, now),
            index::KIT => self.handle_kit(key, now),
            _ => StepAction::Stay,
        };

        self.apply_action(action, now)
    }

    /// Close an open editor or overlay; false if none was open
    fn close_overlay(&mut self) -> bool {
        if self.screens.identity.editor.take().is_some() {
            return true;
        }
        if self.screens.logo.prompt_open {
            self.screens.logo.prompt_open = false;
            return true;
        }
        if self.screens.kit.show_upgrade {
            self.screens.kit.show_upgrade = false;
            return true;
        }
        false
    }

    fn apply_action(&mut self, action: StepAction, now: Instant) -> SessionEvent {
        match action {
            StepAction::Stay => SessionEvent::Continue,
            StepAction::Advance => match self.controller.advance() {
                Ok(Advance::Moved(_)) => {
                    self.enter_step(now);
                    SessionEvent::Continue
                }
                Ok(Advance::Finished) => self.finish(),
                Err(e) => {
                    info!(error = %e, "step incomplete");
                    self.error = Some(e.requirement.to_string());
                    SessionEvent::Continue
                }
            },
            StepAction::Retreat => match self.controller.retreat() {
                Retreat::Moved(_) => {
                    self.enter_step(now);
                    SessionEvent::Continue
                }
                Retreat::Exit => SessionEvent::Exit,
            },
            StepAction::Reset => {
                self.controller.reset();
                self.screens = Screens::default();
                self.pending.clear();
                SessionEvent::Continue
            }
            StepAction::Finish => self.finish(),
        }
    }

    fn finish(&self) -> SessionEvent {
        info!(name = %self.controller.data().name, "wizard finished");
        SessionEvent::Finished(Box::new(self.controller.data().clone()))
    }

    fn handle_vision(&mut self, key: KeyEvent) -> StepAction {
        match key.code {
            KeyCode::Char(c) => {
                let mut vision = self.controller.data().vision.clone();
                vision.push(c);
                self.controller.update_data(BrandPatch::new().vision(vision));
                StepAction::Stay
            }
            KeyCode::Backspace => {
                let mut vision = self.controller.data().vision.clone();
                if vision.pop().is_none() {
                    return StepAction::Retreat;
                }
                self.controller.update_data(BrandPatch::new().vision(vision));
                StepAction::Stay
            }
            KeyCode::Tab => {
                let patch = self.screens.vision.next_example();
                self.controller.update_data(patch);
                StepAction::Stay
            }
            KeyCode::Enter => StepAction::Advance,
            _ => StepAction::Stay,
        }
    }

    fn handle_identity(&mut self, key: KeyEvent, now: Instant) -> StepAction {
        if let Some(field) = self.screens.identity.editor {
            return self.handle_identity_editor(field, key);
        }

        let generating = self.is_generating();
        match key.code {
            KeyCode::Up | KeyCode::Down if !generating => {
                let screen = &mut self.screens.identity;
                let len = screen.suggestions().len();
                screen.selected = step_cursor(screen.selected, len, key.code == KeyCode::Down);
                if let Some(patch) = screen.selection_patch() {
                    self.controller.update_data(patch);
                }
                StepAction::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') if !generating => {
                let vision = self.controller.data().vision.clone();
                self.start_identities(now, vision);
                StepAction::Stay
            }
            KeyCode::Tab => {
                self.screens.identity.editor = Some(IdentityField::Name);
                StepAction::Stay
            }
            KeyCode::Enter => StepAction::Advance,
            KeyCode::Backspace => StepAction::Retreat,
            _ => StepAction::Stay,
        }
    }

    fn handle_identity_editor(&mut self, field: IdentityField, key: KeyEvent) -> StepAction {
        let editor = &mut self.screens.identity.editor;
        match key.code {
            KeyCode::Char(c) => {
                let mut value = field.value(self.controller.data()).to_string();
                value.push(c);
                self.controller.update_data(field.patch(value));
            }
            KeyCode::Backspace => {
                let mut value = field.value(self.controller.data()).to_string();
                value.pop();
                self.controller.update_data(field.patch(value));
            }
            KeyCode::Up => *editor = Some(field.prev()),
            KeyCode::Down => *editor = Some(field.next()),
            KeyCode::Tab | KeyCode::Enter => *editor = None,
            _ => {}
        }
        StepAction::Stay
    }

    fn handle_palette(&mut self, key: KeyEvent) -> StepAction {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                let screen = &mut self.screens.palette;
                screen.selected =
                    step_cursor(screen.selected, screen.schemes.len(), key.code == KeyCode::Down);
                if let Some(patch) = screen.selection_patch() {
                    self.controller.update_data(patch);
                }
                StepAction::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.regenerate_palettes();
                StepAction::Stay
            }
            KeyCode::Enter => StepAction::Advance,
            KeyCode::Backspace => StepAction::Retreat,
            _ => StepAction::Stay,
        }
    }

    fn handle_logo(&mut self, key: KeyEvent, now: Instant) -> StepAction {
        let generating = self.is_generating();
        self.screens.logo.notice = None;

        if self.screens.logo.prompt_open {
            match key.code {
                KeyCode::Char(c) => self.screens.logo.prompt.push(c),
                KeyCode::Backspace => {
                    self.screens.logo.prompt.pop();
                }
                KeyCode::Tab => self.screens.logo.prompt_open = false,
                KeyCode::Enter if !generating => {
                    let seq = self.screens.logo.custom_seq + 1;
                    match self.studio.custom_logo(&self.screens.logo.prompt, seq) {
                        Some(logo) => {
                            self.screens.logo.custom_seq = seq;
                            self.schedule(now, self.delays.custom_logo, Job::CustomLogo(logo));
                        }
                        None => {
                            self.screens.logo.notice = Some(
                                "Custom prompt needed: describe the logo you'd like".to_string(),
                            );
                        }
                    }
                }
                _ => {}
            }
            return StepAction::Stay;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down => {
                let screen = &mut self.screens.logo;
                screen.selected =
                    step_cursor(screen.selected, screen.options.len(), key.code == KeyCode::Down);
                if let Some(patch) = screen.selection_patch() {
                    self.controller.update_data(patch);
                }
                StepAction::Stay
            }
            KeyCode::Char(' ') => {
                self.screens.logo.toggle_like();
                StepAction::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') if !generating => {
                self.start_logos(now);
                StepAction::Stay
            }
            KeyCode::Tab => {
                self.screens.logo.prompt_open = true;
                StepAction::Stay
            }
            KeyCode::Enter => StepAction::Advance,
            KeyCode::Backspace => StepAction::Retreat,
            _ => StepAction::Stay,
        }
    }

    fn handle_kit(&mut self, key: KeyEvent, now: Instant) -> StepAction {
        if self.screens.kit.show_upgrade {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char('M')) {
                self.screens.kit.show_upgrade = false;
            }
            return StepAction::Stay;
        }

        match key.code {
            KeyCode::Char('e') | KeyCode::Char('E') if !self.is_generating() => {
                self.screens.kit.status = None;
                self.schedule(now, self.delays.export, Job::Export(ExportTier::Basic));
                StepAction::Stay
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.screens.kit.show_upgrade = true;
                StepAction::Stay
            }
            KeyCode::Char('n') | KeyCode::Char('N') => StepAction::Reset,
            KeyCode::Enter => StepAction::Finish,
            KeyCode::Backspace => StepAction::Retreat,
            _ => StepAction::Stay,
        }
    }
}
