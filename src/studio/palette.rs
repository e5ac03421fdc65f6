//! Color palettes keyed on tone and industry

use serde::Serialize;

use crate::wizard::ColorSet;

/// A named palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub name: String,
    pub description: String,
    pub colors: ColorSet,
    pub mood: String,
}

impl ColorScheme {
    fn new(name: &str, description: &str, colors: [&str; 4], mood: &str) -> Self {
        let [primary, secondary, accent, neutral] = colors;
        Self {
            name: name.to_string(),
            description: description.to_string(),
            colors: ColorSet::new(primary, secondary, accent, neutral),
            mood: mood.to_string(),
        }
    }
}

pub fn suggest_palettes(tone: &str, industry: &str) -> Vec<ColorScheme> {
    let tone = tone.to_lowercase();
    let industry = industry.to_lowercase();

    if tone.contains("sustainable") || industry.contains("sustainability") {
        vec![
            ColorScheme::new(
                "Forest Harmony",
                "Natural greens with earthy accents for environmental trust",
                ["#047857", "#059669", "#f59e0b", "#6b7280"],
                "Natural, trustworthy, growing",
            ),
            ColorScheme::new(
                "Ocean Breeze",
                "Cool blues and teals conveying freshness and clarity",
                ["#0891b2", "#0d9488", "#06b6d4", "#64748b"],
                "Fresh, clean, infinite",
            ),
            ColorScheme::new(
                "Earth Elements",
                "Warm browns and sage greens for organic authenticity",
                ["#92400e", "#65a30d", "#ca8a04", "#78716c"],
                "Organic, authentic, grounded",
            ),
        ]
    } else if tone.contains("tech") || tone.contains("ai") || industry.contains("technology") {
        vec![
            ColorScheme::new(
                "Digital Future",
                "Modern purples and blues for tech innovation",
                ["#7c3aed", "#3b82f6", "#06b6d4", "#64748b"],
                "Innovative, digital, forward-thinking",
            ),
            ColorScheme::new(
                "Neural Network",
                "Deep blues with electric accents for AI sophistication",
                ["#1e40af", "#3730a3", "#ec4899", "#6b7280"],
                "Intelligent, sophisticated, cutting-edge",
            ),
            ColorScheme::new(
                "Cyber Glow",
                "Neon-inspired palette for modern tech appeal",
                ["#8b5cf6", "#06b6d4", "#f59e0b", "#64748b"],
                "Electric, modern, dynamic",
            ),
        ]
    } else {
        vec![
            ColorScheme::new(
                "Professional Edge",
                "Classic blues with warm accents for business trust",
                ["#2563eb", "#1d4ed8", "#f59e0b", "#6b7280"],
                "Professional, trustworthy, reliable",
            ),
            ColorScheme::new(
                "Creative Burst",
                "Vibrant palette for creative and energetic brands",
                ["#dc2626", "#ea580c", "#7c2d12", "#78716c"],
                "Energetic, bold, creative",
            ),
            ColorScheme::new(
                "Elegant Minimalism",
                "Sophisticated grays with purple accent for luxury feel",
                ["#374151", "#4b5563", "#8b5cf6", "#9ca3af"],
                "Elegant, minimalist, sophisticated",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_is_valid_hex() {
        for (tone, industry) in [
            ("", "Sustainability"),
            ("", "Technology"),
            ("", "Innovation"),
        ] {
            for scheme in suggest_palettes(tone, industry) {
                assert!(scheme.colors.is_valid(), "{} has a bad color", scheme.name);
            }
        }
    }

    #[test]
    fn test_tone_alone_can_select_tech() {
        let schemes = suggest_palettes("High-tech and bold", "Innovation");
        assert_eq!(schemes[0].name, "Digital Future");
    }
}
