//! Step definitions and their completion checks

use std::fmt;

use super::record::BrandRecord;

/// Vision text must be strictly longer than this (trimmed, in characters)
pub const MIN_VISION_CHARS: usize = 50;

/// One stage of the wizard.
///
/// Definitions are static and ordered; the controller never reorders them.
#[derive(Clone, Copy)]
pub struct StepDefinition {
    /// 1-based id shown to the user
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Shown when `is_complete` is false
    pub requirement: &'static str,
    pub is_complete: fn(&BrandRecord) -> bool,
}

impl StepDefinition {
    pub fn is_complete(&self, data: &BrandRecord) -> bool {
        (self.is_complete)(data)
    }
}

impl fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Index of each brand step in [`BRAND_STEPS`]
pub mod index {
    pub const VISION: usize = 0;
    pub const IDENTITY: usize = 1;
    pub const PALETTE: usize = 2;
    pub const LOGO: usize = 3;
    pub const KIT: usize = 4;
}

/// The five BrandForge steps, in order
pub static BRAND_STEPS: [StepDefinition; 5] = [
    StepDefinition {
        id: 1,
        title: "Vision Input",
        description: "Share your startup vision",
        requirement: "Minimum 50 characters required",
        is_complete: vision_ready,
    },
    StepDefinition {
        id: 2,
        title: "Brand Identity",
        description: "AI-generated suggestions",
        requirement: "Pick a suggestion or enter a brand name",
        is_complete: identity_ready,
    },
    StepDefinition {
        id: 3,
        title: "Color Palette",
        description: "Perfect color combinations",
        requirement: "Every palette color must be a #RRGGBB value",
        is_complete: palette_ready,
    },
    StepDefinition {
        id: 4,
        title: "Logo Design",
        description: "Custom logo generation",
        requirement: "Select a logo concept",
        is_complete: logo_ready,
    },
    StepDefinition {
        id: 5,
        title: "Brand Kit",
        description: "Complete brand preview",
        requirement: "",
        is_complete: always,
    },
];

/// Owned copy of the brand steps for a new controller
pub fn brand_steps() -> Vec<StepDefinition> {
    BRAND_STEPS.to_vec()
}

/// Trimmed character count of the vision text
pub fn vision_length(data: &BrandRecord) -> usize {
    data.vision.trim().chars().count()
}

fn vision_ready(data: &BrandRecord) -> bool {
    vision_length(data) > MIN_VISION_CHARS
}

fn identity_ready(data: &BrandRecord) -> bool {
    !data.name.trim().is_empty()
}

fn palette_ready(data: &BrandRecord) -> bool {
    data.colors.is_valid()
}

fn logo_ready(data: &BrandRecord) -> bool {
    data.logo_url.is_some()
}

fn always(_: &BrandRecord) -> bool {
    true
}
