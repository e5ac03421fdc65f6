//! Per-step screen state for the interactive wizard
//!
//! Each wizard step has a collaborator screen that remembers what it showed
//! (generated options, cursor, open editors). Screens never move between
//! steps themselves; they hand a [`StepAction`] back to the session.

use crate::report::ExportTier;
use crate::studio::{BrandSuggestion, ColorScheme, IdentitySet, LogoOption, EXAMPLE_VISIONS};
use crate::wizard::{BrandPatch, BrandRecord};

/// What a screen asks the session to do after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Stay on the current step
    Stay,
    /// Validate and move to the next step
    Advance,
    /// Move to the previous step (or leave the wizard from the first)
    Retreat,
    /// Start over with a fresh brand
    Reset,
    /// Complete the wizard with the current record
    Finish,
}

/// Payload of a delayed generation
#[derive(Debug, Clone)]
pub enum Job {
    Identities(IdentitySet),
    Logos(Vec<LogoOption>),
    CustomLogo(LogoOption),
    Export(ExportTier),
}

impl Job {
    pub fn label(&self) -> &'static str {
        match self {
            Job::Identities(_) => "Generating brand suggestions",
            Job::Logos(_) => "Designing logo concepts",
            Job::CustomLogo(_) => "Creating custom logo",
            Job::Export(_) => "Exporting brand kit",
        }
    }
}

/// Move a list cursor by one, clamped to `len`
pub fn step_cursor(cursor: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (cursor + 1).min(len - 1)
    } else {
        cursor.saturating_sub(1)
    }
}

// ============================================================================
// Vision
// ============================================================================

#[derive(Debug, Default)]
pub struct VisionScreen {
    /// Next example inserted by Tab
    pub example_cursor: usize,
}

impl VisionScreen {
    /// Patch replacing the vision with the next example
    pub fn next_example(&mut self) -> BrandPatch {
        let vision = EXAMPLE_VISIONS[self.example_cursor % EXAMPLE_VISIONS.len()];
        self.example_cursor = (self.example_cursor + 1) % EXAMPLE_VISIONS.len();
        BrandPatch::new().vision(vision)
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Field targeted by the custom identity editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Tagline,
    Tone,
}

impl IdentityField {
    pub fn label(self) -> &'static str {
        match self {
            IdentityField::Name => "Brand Name",
            IdentityField::Tagline => "Tagline",
            IdentityField::Tone => "Brand Tone",
        }
    }

    pub fn next(self) -> Self {
        match self {
            IdentityField::Name => IdentityField::Tagline,
            IdentityField::Tagline => IdentityField::Tone,
            IdentityField::Tone => IdentityField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            IdentityField::Name => IdentityField::Tone,
            IdentityField::Tagline => IdentityField::Name,
            IdentityField::Tone => IdentityField::Tagline,
        }
    }

    pub fn value(self, data: &BrandRecord) -> &str {
        match self {
            IdentityField::Name => &data.name,
            IdentityField::Tagline => &data.tagline,
            IdentityField::Tone => &data.tone,
        }
    }

    pub fn patch(self, value: String) -> BrandPatch {
        match self {
            IdentityField::Name => BrandPatch::new().name(value),
            IdentityField::Tagline => BrandPatch::new().tagline(value),
            IdentityField::Tone => BrandPatch::new().tone(value),
        }
    }
}

#[derive(Debug, Default)]
pub struct IdentityScreen {
    /// Generated suggestions; `None` until the first fill lands
    pub set: Option<IdentitySet>,
    pub selected: usize,
    /// Vision the current suggestions were generated from
    pub generated_for: Option<String>,
    /// Open custom editor
    pub editor: Option<IdentityField>,
}

impl IdentityScreen {
    pub fn needs_generation(&self, vision: &str) -> bool {
        self.set.is_none() || self.generated_for.as_deref() != Some(vision)
    }

    pub fn suggestions(&self) -> &[BrandSuggestion] {
        self.set.as_ref().map(|s| s.suggestions.as_slice()).unwrap_or(&[])
    }

    /// Patch applying the highlighted suggestion
    pub fn selection_patch(&self) -> Option<BrandPatch> {
        let s = self.suggestions().get(self.selected)?;
        Some(
            BrandPatch::new()
                .name(s.name.clone())
                .tagline(s.tagline.clone())
                .tone(s.tone.clone()),
        )
    }
}

/// Patch applied when a fresh identity set arrives: first suggestion plus industry
pub fn identity_default_patch(set: &IdentitySet) -> BrandPatch {
    let patch = BrandPatch::new().industry(set.industry.clone());
    match set.default_choice() {
        Some(s) => patch
            .name(s.name.clone())
            .tagline(s.tagline.clone())
            .tone(s.tone.clone()),
        None => patch,
    }
}

// ============================================================================
// Palette
// ============================================================================

#[derive(Debug, Default)]
pub struct PaletteScreen {
    pub schemes: Vec<ColorScheme>,
    pub selected: usize,
    /// (tone, industry) the schemes were generated from
    pub generated_for: Option<(String, String)>,
}

impl PaletteScreen {
    pub fn needs_generation(&self, tone: &str, industry: &str) -> bool {
        match &self.generated_for {
            Some((t, i)) => self.schemes.is_empty() || t != tone || i != industry,
            None => true,
        }
    }

    pub fn selection_patch(&self) -> Option<BrandPatch> {
        self.schemes
            .get(self.selected)
            .map(|s| BrandPatch::new().colors(s.colors.clone()))
    }
}

// ============================================================================
// Logo
// ============================================================================

#[derive(Debug, Default)]
pub struct LogoScreen {
    pub options: Vec<LogoOption>,
    pub selected: usize,
    /// Custom prompt text
    pub prompt: String,
    pub prompt_open: bool,
    /// Sequence number of the last custom concept
    pub custom_seq: u32,
    /// Inline notice (e.g. blank prompt)
    pub notice: Option<String>,
}

impl LogoScreen {
    pub fn selected_option(&self) -> Option<&LogoOption> {
        self.options.get(self.selected)
    }

    pub fn selection_patch(&self) -> Option<BrandPatch> {
        self.selected_option()
            .map(|l| BrandPatch::new().logo_url(l.url.clone()))
    }

    pub fn toggle_like(&mut self) {
        if let Some(logo) = self.options.get_mut(self.selected) {
            logo.liked = !logo.liked;
        }
    }
}

// ============================================================================
// Brand kit
// ============================================================================

#[derive(Debug, Default)]
pub struct KitScreen {
    /// Result line of the last export
    pub status: Option<String>,
    /// Premium tier overlay
    pub show_upgrade: bool,
}

/// All step screens of one wizard visit
#[derive(Debug, Default)]
pub struct Screens {
    pub vision: VisionScreen,
    pub identity: IdentityScreen,
    pub palette: PaletteScreen,
    pub logo: LogoScreen,
    pub kit: KitScreen,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::suggest_identities;

    #[test]
    fn test_step_cursor_clamps() {
        assert_eq!(step_cursor(0, 3, false), 0);
        assert_eq!(step_cursor(0, 3, true), 1);
        assert_eq!(step_cursor(2, 3, true), 2);
        assert_eq!(step_cursor(5, 0, true), 0);
    }

    #[test]
    fn test_examples_cycle() {
        let mut screen = VisionScreen::default();
        let first = screen.next_example();
        screen.next_example();
        screen.next_example();
        assert_eq!(screen.next_example(), first);
    }

    #[test]
    fn test_identity_field_cycle() {
        let mut field = IdentityField::Name;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, IdentityField::Name);
        assert_eq!(IdentityField::Name.prev(), IdentityField::Tone);
    }

    #[test]
    fn test_identity_default_patch() {
        let set = suggest_identities("sustainable farming");
        let mut record = BrandRecord::default();
        record.merge(identity_default_patch(&set));
        assert_eq!(record.name, "EcoFlow");
        assert_eq!(record.industry, "Sustainability");
    }

    #[test]
    fn test_identity_regenerates_on_new_vision() {
        let mut screen = IdentityScreen::default();
        assert!(screen.needs_generation("a"));
        screen.set = Some(suggest_identities("a"));
        screen.generated_for = Some("a".to_string());
        assert!(!screen.needs_generation("a"));
        assert!(screen.needs_generation("b"));
    }
}
