//! Brand data accumulated across the wizard steps

use serde::{Deserialize, Serialize};

/// Default palette shown before any palette is generated
pub const DEFAULT_PRIMARY: &str = "#6366f1";
pub const DEFAULT_SECONDARY: &str = "#f59e0b";
pub const DEFAULT_ACCENT: &str = "#ec4899";
pub const DEFAULT_NEUTRAL: &str = "#6b7280";

/// Four-entry brand color mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub neutral: String,
}

impl ColorSet {
    pub fn new(primary: &str, secondary: &str, accent: &str, neutral: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            neutral: neutral.to_string(),
        }
    }

    /// Colors paired with their role label, in display order
    pub fn labeled(&self) -> [(&'static str, &str); 4] {
        [
            ("Primary", self.primary.as_str()),
            ("Secondary", self.secondary.as_str()),
            ("Accent", self.accent.as_str()),
            ("Neutral", self.neutral.as_str()),
        ]
    }

    /// True when every entry is a `#RRGGBB` hex value
    pub fn is_valid(&self) -> bool {
        self.labeled().iter().all(|(_, hex)| is_hex_color(hex))
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::new(
            DEFAULT_PRIMARY,
            DEFAULT_SECONDARY,
            DEFAULT_ACCENT,
            DEFAULT_NEUTRAL,
        )
    }
}

/// Heading and body typefaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    pub primary: String,
    pub secondary: String,
}

impl Default for FontPair {
    fn default() -> Self {
        Self {
            primary: "Inter".to_string(),
            secondary: "Playfair Display".to_string(),
        }
    }
}

/// Everything the wizard collects or derives.
///
/// Fields are overwritten freely by the step collaborators; nothing here is
/// checked for consistency with anything else (a palette picked for one tone
/// stays put if the tone is later edited).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRecord {
    pub vision: String,
    pub name: String,
    pub tagline: String,
    pub tone: String,
    pub industry: String,
    pub colors: ColorSet,
    pub fonts: FontPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moodboard_url: Option<String>,
}

impl BrandRecord {
    /// Overwrite every field present in `patch`, leaving the rest untouched
    pub fn merge(&mut self, patch: BrandPatch) {
        let BrandPatch {
            vision,
            name,
            tagline,
            tone,
            industry,
            colors,
            fonts,
            logo_url,
            moodboard_url,
        } = patch;

        if let Some(v) = vision {
            self.vision = v;
        }
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = tagline {
            self.tagline = v;
        }
        if let Some(v) = tone {
            self.tone = v;
        }
        if let Some(v) = industry {
            self.industry = v;
        }
        if let Some(v) = colors {
            self.colors = v;
        }
        if let Some(v) = fonts {
            self.fonts = v;
        }
        if let Some(v) = logo_url {
            self.logo_url = Some(v);
        }
        if let Some(v) = moodboard_url {
            self.moodboard_url = Some(v);
        }
    }
}

/// Partial [`BrandRecord`]; `None` means "leave as is"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrandPatch {
    pub vision: Option<String>,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub tone: Option<String>,
    pub industry: Option<String>,
    pub colors: Option<ColorSet>,
    pub fonts: Option<FontPair>,
    pub logo_url: Option<String>,
    pub moodboard_url: Option<String>,
}

impl BrandPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vision(mut self, value: impl Into<String>) -> Self {
        self.vision = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn tagline(mut self, value: impl Into<String>) -> Self {
        self.tagline = Some(value.into());
        self
    }

    pub fn tone(mut self, value: impl Into<String>) -> Self {
        self.tone = Some(value.into());
        self
    }

    pub fn industry(mut self, value: impl Into<String>) -> Self {
        self.industry = Some(value.into());
        self
    }

    pub fn colors(mut self, value: ColorSet) -> Self {
        self.colors = Some(value);
        self
    }

    pub fn fonts(mut self, value: FontPair) -> Self {
        self.fonts = Some(value);
        self
    }

    pub fn logo_url(mut self, value: impl Into<String>) -> Self {
        self.logo_url = Some(value.into());
        self
    }

    pub fn moodboard_url(mut self, value: impl Into<String>) -> Self {
        self.moodboard_url = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Check a `#RRGGBB` color literal
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
