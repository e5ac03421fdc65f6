//! Mock "AI" generation for the wizard steps
//!
//! Every generator is a fixed table picked by keyword matching. The tables
//! sit behind [`BrandStudio`] so the wizard and its tests never depend on the
//! specific content, and a real generator could be swapped in later.

mod identity;
mod logo;
mod palette;
mod vision;

use std::time::Duration;

pub use identity::{suggest_identities, BrandSuggestion, IdentitySet};
pub use logo::{custom_logo, fallback_logo_url, suggest_logos, LogoOption};
pub use palette::{suggest_palettes, ColorScheme};
pub use vision::{uploaded_vision, EXAMPLE_VISIONS};

/// Source of generated brand content
pub trait BrandStudio {
    /// Name/tagline/tone candidates plus the inferred industry
    fn identities(&self, vision: &str) -> IdentitySet;

    /// Palettes suited to a tone and industry
    fn palettes(&self, tone: &str, industry: &str) -> Vec<ColorScheme>;

    /// Logo concepts
    fn logos(&self) -> Vec<LogoOption>;

    /// Concept from a free-text prompt; `None` for a blank prompt
    fn custom_logo(&self, prompt: &str, seq: u32) -> Option<LogoOption>;
}

/// Keyword-table studio
#[derive(Debug, Clone, Copy, Default)]
pub struct MockStudio;

impl BrandStudio for MockStudio {
    fn identities(&self, vision: &str) -> IdentitySet {
        suggest_identities(vision)
    }

    fn palettes(&self, tone: &str, industry: &str) -> Vec<ColorScheme> {
        suggest_palettes(tone, industry)
    }

    fn logos(&self) -> Vec<LogoOption> {
        suggest_logos()
    }

    fn custom_logo(&self, prompt: &str, seq: u32) -> Option<LogoOption> {
        custom_logo(prompt, seq)
    }
}

/// Simulated latency of each generation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationDelays {
    pub identities: Duration,
    pub logos: Duration,
    pub custom_logo: Duration,
    pub export: Duration,
}

impl Default for GenerationDelays {
    fn default() -> Self {
        Self {
            identities: Duration::from_millis(2000),
            logos: Duration::from_millis(3000),
            custom_logo: Duration::from_millis(2000),
            export: Duration::from_millis(2000),
        }
    }
}

impl GenerationDelays {
    /// No waiting at all
    pub fn instant() -> Self {
        Self::scaled(0.0)
    }

    /// Default delays multiplied by `factor` (negative is treated as zero)
    pub fn scaled(factor: f64) -> Self {
        let factor = factor.max(0.0);
        let base = Self::default();
        Self {
            identities: base.identities.mul_f64(factor),
            logos: base.logos.mul_f64(factor),
            custom_logo: base.custom_logo.mul_f64(factor),
            export: base.export.mul_f64(factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_delays() {
        let half = GenerationDelays::scaled(0.5);
        assert_eq!(half.identities, Duration::from_millis(1000));
        assert_eq!(half.logos, Duration::from_millis(1500));

        let none = GenerationDelays::instant();
        assert_eq!(none.export, Duration::ZERO);
        assert_eq!(GenerationDelays::scaled(-3.0), none);
    }

    #[test]
    fn test_mock_studio_is_object_safe() {
        let studio: Box<dyn BrandStudio> = Box::new(MockStudio);
        assert_eq!(studio.logos().len(), 4);
    }
}
