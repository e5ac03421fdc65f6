//! Logo concepts

use serde::Serialize;

const MINIMAL_URL: &str =
    "https://images.unsplash.com/photo-1634942537034-2531766767d1?w=400&h=400&fit=crop&crop=center";
const ABSTRACT_URL: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=400&h=400&fit=crop&crop=center";
const TYPOGRAPHIC_URL: &str =
    "https://images.unsplash.com/photo-1635776062127-d379bfcba9f8?w=400&h=400&fit=crop&crop=center";

/// One logo concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoOption {
    pub id: String,
    pub url: String,
    pub style: String,
    pub description: String,
    pub liked: bool,
}

impl LogoOption {
    fn new(id: &str, url: &str, style: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            style: style.to_string(),
            description: description.to_string(),
            liked: false,
        }
    }
}

pub fn suggest_logos() -> Vec<LogoOption> {
    vec![
        LogoOption::new(
            "logo1",
            MINIMAL_URL,
            "Modern Minimal",
            "Clean geometric design with your brand colors",
        ),
        LogoOption::new(
            "logo2",
            ABSTRACT_URL,
            "Abstract Symbol",
            "Symbolic representation of your brand values",
        ),
        LogoOption::new(
            "logo3",
            TYPOGRAPHIC_URL,
            "Typographic",
            "Text-based logo with custom typography",
        ),
        LogoOption::new(
            "logo4",
            MINIMAL_URL,
            "Icon + Text",
            "Balanced combination of symbol and text",
        ),
    ]
}

/// Concept built from a free-text prompt; `None` when the prompt is blank
pub fn custom_logo(prompt: &str, seq: u32) -> Option<LogoOption> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return None;
    }
    Some(LogoOption {
        id: format!("custom-{}", seq),
        url: TYPOGRAPHIC_URL.to_string(),
        style: "Custom Design".to_string(),
        description: prompt.to_string(),
        liked: false,
    })
}

/// Placeholder shown in the brand kit when no logo was chosen
pub fn fallback_logo_url() -> &'static str {
    MINIMAL_URL
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_unique_concepts() {
        let logos = suggest_logos();
        assert_eq!(logos.len(), 4);
        let ids: HashSet<_> = logos.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert!(logos.iter().all(|l| !l.liked));
    }

    #[test]
    fn test_custom_logo_trims_prompt() {
        let logo = custom_logo("  mountain peak in green ", 2).unwrap();
        assert_eq!(logo.id, "custom-2");
        assert_eq!(logo.description, "mountain peak in green");
        assert_eq!(logo.style, "Custom Design");
    }

    #[test]
    fn test_custom_logo_blank_prompt() {
        assert!(custom_logo("", 1).is_none());
        assert!(custom_logo("   \t", 1).is_none());
    }
}
