//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Instant;

use brandforge::cli::{SessionEvent, WizardSession};
use brandforge::studio::{GenerationDelays, MockStudio};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Vision that passes the first step and triggers the sustainability tables
pub const ECO_VISION: &str =
    "A sustainable marketplace connecting local farmers with eco-conscious restaurants across the city.";

/// Vision that triggers the technology tables
pub const AI_VISION: &str =
    "An AI assistant that reviews pull requests and explains every suggested change in plain language.";

/// Vision with no keywords
pub const PLAIN_VISION: &str =
    "A subscription service delivering curated board games to families every month, with video rules.";

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Session with no simulated latency
pub fn instant_session() -> WizardSession {
    WizardSession::new(Box::new(MockStudio), GenerationDelays::instant())
}

/// Press a key and let any instantly-ready job land
pub fn press(session: &mut WizardSession, code: KeyCode) -> SessionEvent {
    let now = Instant::now();
    let event = session.handle_key(key(code), now);
    session.tick(now);
    event
}

pub fn type_text(session: &mut WizardSession, text: &str) {
    for c in text.chars() {
        press(session, KeyCode::Char(c));
    }
}

/// Session positioned on `step` (0-based) with default choices applied
pub fn session_at(step: usize) -> WizardSession {
    let mut session = instant_session().with_vision(ECO_VISION);
    for _ in 0..step {
        press(&mut session, KeyCode::Enter);
    }
    session
}
