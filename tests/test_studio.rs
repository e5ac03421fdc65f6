//! Tests for the mock generation tables

use brandforge::studio::{
    custom_logo, suggest_identities, suggest_logos, suggest_palettes, uploaded_vision,
    BrandStudio, MockStudio, EXAMPLE_VISIONS,
};
use brandforge::wizard::MIN_VISION_CHARS;

#[test]
fn test_identity_keyword_precedence() {
    // Sustainability wins over technology
    let set = suggest_identities("Sustainable AI for eco farms");
    assert_eq!(set.suggestions[0].name, "EcoFlow");

    let set = suggest_identities("Tech for remote teams");
    assert_eq!(set.suggestions[0].name, "MindBridge");
}

#[test]
fn test_industry_only_uses_exact_keywords() {
    // "eco" selects the eco names, but only "sustainable" sets the industry
    let set = suggest_identities("An eco friendly laundry");
    assert_eq!(set.suggestions[0].name, "EcoFlow");
    assert_eq!(set.industry, "Innovation");
}

#[test]
fn test_three_suggestions_each() {
    for vision in ["sustainable", "ai", "bakery"] {
        let set = suggest_identities(vision);
        assert_eq!(set.suggestions.len(), 3, "vision {:?}", vision);
        assert!(set.default_choice().is_some());
    }
}

#[test]
fn test_palettes_by_tone_and_industry() {
    let names = |tone: &str, industry: &str| -> Vec<String> {
        suggest_palettes(tone, industry)
            .into_iter()
            .map(|s| s.name)
            .collect()
    };
    assert_eq!(
        names("", "Sustainability"),
        ["Forest Harmony", "Ocean Breeze", "Earth Elements"]
    );
    assert_eq!(names("Tech savvy", "Retail")[0], "Digital Future");
    assert_eq!(names("", "Technology")[0], "Digital Future");
    assert_eq!(names("Calm", "Innovation")[0], "Professional Edge");
}

#[test]
fn test_palette_colors_are_hex() {
    for industry in ["Sustainability", "Technology", "Innovation"] {
        for scheme in suggest_palettes("", industry) {
            assert!(scheme.colors.is_valid(), "{} has invalid colors", scheme.name);
        }
    }
}

#[test]
fn test_logo_concepts() {
    let styles: Vec<_> = suggest_logos().into_iter().map(|l| l.style).collect();
    assert_eq!(
        styles,
        ["Modern Minimal", "Abstract Symbol", "Typographic", "Icon + Text"]
    );
    assert!(suggest_logos().iter().all(|l| !l.liked));
}

#[test]
fn test_custom_logo_rejects_blank_prompt() {
    assert!(custom_logo("", 1).is_none());
    assert!(custom_logo("   ", 1).is_none());

    let logo = custom_logo("  mountain peak  ", 7).unwrap();
    assert_eq!(logo.id, "custom-7");
    assert_eq!(logo.style, "Custom Design");
    assert_eq!(logo.description, "mountain peak");
}

#[test]
fn test_mock_studio_delegates() {
    let studio = MockStudio;
    assert_eq!(studio.identities("eco").suggestions[0].name, "EcoFlow");
    assert_eq!(studio.palettes("", "Technology").len(), 3);
    assert!(studio.custom_logo("", 1).is_none());
}

#[test]
fn test_example_visions_pass_first_step() {
    for vision in EXAMPLE_VISIONS {
        assert!(vision.trim().chars().count() > MIN_VISION_CHARS);
    }
    assert!(uploaded_vision("deck.pdf").contains("deck.pdf"));
}
