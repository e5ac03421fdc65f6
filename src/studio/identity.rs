//! Name, tagline and tone suggestions keyed on the vision text

use serde::Serialize;

/// One candidate brand identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandSuggestion {
    pub name: String,
    pub tagline: String,
    pub tone: String,
    pub reasoning: String,
}

impl BrandSuggestion {
    fn new(name: &str, tagline: &str, tone: &str, reasoning: &str) -> Self {
        Self {
            name: name.to_string(),
            tagline: tagline.to_string(),
            tone: tone.to_string(),
            reasoning: reasoning.to_string(),
        }
    }
}

/// Suggestions for one vision plus the industry inferred from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentitySet {
    pub suggestions: Vec<BrandSuggestion>,
    pub industry: String,
}

impl IdentitySet {
    /// The suggestion pre-applied before the user picks one
    pub fn default_choice(&self) -> Option<&BrandSuggestion> {
        self.suggestions.first()
    }
}

/// Keyword-matched suggestion table
pub fn suggest_identities(vision: &str) -> IdentitySet {
    let vision = vision.to_lowercase();

    let suggestions = if vision.contains("sustainable") || vision.contains("eco") {
        vec![
            BrandSuggestion::new(
                "EcoFlow",
                "Sustainable choices, seamless future",
                "Professional, environmentally conscious, trustworthy",
                "Emphasizes flow and continuity of sustainable practices",
            ),
            BrandSuggestion::new(
                "GreenVault",
                "Protecting what matters most",
                "Reliable, protective, forward-thinking",
                "Suggests security and preservation of environmental values",
            ),
            BrandSuggestion::new(
                "TerraLink",
                "Connecting earth to innovation",
                "Modern, connective, nature-inspired",
                "Links technology with environmental stewardship",
            ),
        ]
    } else if vision.contains("ai") || vision.contains("tech") {
        vec![
            BrandSuggestion::new(
                "MindBridge",
                "Bridging human potential with AI",
                "Innovative, human-centered, intelligent",
                "Connects human needs with artificial intelligence",
            ),
            BrandSuggestion::new(
                "NeuralFlow",
                "Intelligence that adapts to you",
                "Smart, adaptive, user-focused",
                "Suggests fluid, natural AI interaction",
            ),
            BrandSuggestion::new(
                "CogniSphere",
                "Your world of intelligent solutions",
                "Comprehensive, intelligent, encompassing",
                "Implies complete cognitive ecosystem",
            ),
        ]
    } else {
        vec![
            BrandSuggestion::new(
                "VisionCraft",
                "Crafting tomorrow's solutions today",
                "Creative, forward-thinking, craftsmanship-focused",
                "Emphasizes skilled creation of future-oriented solutions",
            ),
            BrandSuggestion::new(
                "PulsePoint",
                "At the heart of innovation",
                "Dynamic, central, pulse of industry",
                "Suggests being at the core of industry movement",
            ),
            BrandSuggestion::new(
                "NexusLab",
                "Where ideas become reality",
                "Experimental, connecting, reality-making",
                "Laboratory for turning concepts into tangible outcomes",
            ),
        ]
    };

    // Industry keys are narrower than the table keys: "eco" alone picks the
    // green names but not the Sustainability industry.
    let industry = if vision.contains("sustainable") {
        "Sustainability"
    } else if vision.contains("ai") {
        "Technology"
    } else {
        "Innovation"
    };

    IdentitySet {
        suggestions,
        industry: industry.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eco_without_sustainable() {
        let set = suggest_identities("An eco friendly laundry service");
        assert_eq!(set.suggestions[0].name, "EcoFlow");
        assert_eq!(set.industry, "Innovation");
    }

    #[test]
    fn test_tech_without_ai() {
        let set = suggest_identities("Fintech for freelancers");
        assert_eq!(set.suggestions[0].name, "MindBridge");
        assert_eq!(set.industry, "Innovation");
    }

    #[test]
    fn test_case_insensitive() {
        let set = suggest_identities("SUSTAINABLE FOOD");
        assert_eq!(set.industry, "Sustainability");
    }
}
