//! Vision text helpers: inspiration examples and the pitch-deck placeholder

/// Sample visions offered when the user needs inspiration
pub const EXAMPLE_VISIONS: [&str; 3] = [
    "A sustainable food delivery platform that connects local organic farmers directly with conscious consumers, reducing food miles and supporting community agriculture.",
    "An AI-powered mental wellness app that provides personalized meditation, mood tracking, and connects users with certified therapists for affordable, accessible mental health support.",
    "A blockchain-based platform for musicians that enables direct fan funding, transparent royalty distribution, and decentralized music streaming without traditional record labels.",
];

/// Vision text used when a pitch deck is "uploaded".
///
/// Documents are not parsed; the user is asked to describe the vision by hand.
pub fn uploaded_vision(file_name: &str) -> String {
    format!(
        "Uploaded: {}\n\nPlease describe your startup vision manually for this demo.",
        file_name
    )
}
