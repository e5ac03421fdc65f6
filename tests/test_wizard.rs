//! Tests for the wizard step-sequencing state machine
//!
//! These exercise `WizardController` directly: gating, navigation, data
//! merging and the stale-fill guard. No terminal or session involved.

use brandforge::wizard::{
    brand_steps, Advance, BrandPatch, BrandRecord, ColorSet, Retreat, StepDefinition,
    WizardController, MIN_VISION_CHARS,
};

fn complete_record() -> BrandRecord {
    let mut record = BrandRecord::default();
    record.merge(
        BrandPatch::new()
            .vision("v".repeat(MIN_VISION_CHARS + 10))
            .name("EcoFlow")
            .tagline("Flowing towards a sustainable future")
            .tone("Professional & Sustainable")
            .industry("Sustainability")
            .logo_url("https://example.com/logo.png"),
    );
    record
}

fn controller_at(step: usize) -> WizardController {
    let mut wizard = WizardController::brand();
    wizard.update_data(BrandPatch {
        vision: Some(complete_record().vision),
        name: Some("EcoFlow".into()),
        logo_url: Some("https://example.com/logo.png".into()),
        ..Default::default()
    });
    for _ in 0..step {
        wizard.advance().expect("complete record should advance");
    }
    assert_eq!(wizard.current_index(), step);
    wizard
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_wizard_starts_at_first_step() {
    let wizard = WizardController::brand();
    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.step_count(), 5);
    assert_eq!(wizard.data(), &BrandRecord::default());
    assert_eq!(wizard.current_step().title, "Vision Input");
}

#[test]
fn test_step_table_order() {
    let titles: Vec<_> = brand_steps().iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        [
            "Vision Input",
            "Brand Identity",
            "Color Palette",
            "Logo Design",
            "Brand Kit"
        ]
    );
    let ids: Vec<_> = brand_steps().iter().map(|s| s.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[test]
#[should_panic(expected = "at least one step")]
fn test_empty_step_list_panics() {
    WizardController::new(Vec::new());
}

// ============================================================================
// Advance
// ============================================================================

#[test]
fn test_advance_blocked_on_short_vision() {
    let mut wizard = WizardController::brand();
    wizard.update_data(BrandPatch::new().vision("Too short"));

    let err = wizard.advance().unwrap_err();
    assert_eq!(err.step_id, 1);
    assert_eq!(err.requirement, "Minimum 50 characters required");
    assert_eq!(wizard.current_index(), 0);
}

#[test]
fn test_vision_scenario_zero_then_sixty_chars() {
    let mut wizard = WizardController::brand();
    assert!(wizard.advance().is_err());

    wizard.update_data(BrandPatch::new().vision("a".repeat(60)));
    assert_eq!(wizard.advance(), Ok(Advance::Moved(1)));
    assert_eq!(wizard.current_step().title, "Brand Identity");
}

#[test]
fn test_vision_boundary_is_exclusive() {
    let mut wizard = WizardController::brand();
    wizard.update_data(BrandPatch::new().vision("a".repeat(MIN_VISION_CHARS)));
    assert!(wizard.advance().is_err());

    wizard.update_data(BrandPatch::new().vision("a".repeat(MIN_VISION_CHARS + 1)));
    assert!(wizard.advance().is_ok());
}

#[test]
fn test_whitespace_does_not_count_towards_vision() {
    let mut wizard = WizardController::brand();
    let padded = format!("{}{}", " ".repeat(40), "a".repeat(20));
    wizard.update_data(BrandPatch::new().vision(padded));
    assert!(wizard.advance().is_err());
}

#[test]
fn test_identity_requires_name() {
    let mut wizard = controller_at(1);
    wizard.update_data(BrandPatch::new().name("   "));
    let err = wizard.advance().unwrap_err();
    assert_eq!(err.step_title, "Brand Identity");

    wizard.update_data(BrandPatch::new().name("MindBridge"));
    assert_eq!(wizard.advance(), Ok(Advance::Moved(2)));
}

#[test]
fn test_palette_requires_hex_colors() {
    let mut wizard = controller_at(2);
    wizard.update_data(BrandPatch::new().colors(ColorSet::new(
        "green", "#0891b2", "#84cc16", "#6b7280",
    )));
    assert!(wizard.advance().is_err());

    wizard.update_data(BrandPatch::new().colors(ColorSet::default()));
    assert!(wizard.advance().is_ok());
}

#[test]
fn test_logo_requires_selection() {
    let mut wizard = WizardController::brand();
    wizard.update_data(BrandPatch {
        vision: Some("v".repeat(60)),
        name: Some("EcoFlow".into()),
        ..Default::default()
    });
    for _ in 0..3 {
        wizard.advance().unwrap();
    }
    let err = wizard.advance().unwrap_err();
    assert_eq!(err.to_string(), "Logo Design: Select a logo concept");
}

#[test]
fn test_advance_at_last_step_is_noop() {
    let mut wizard = controller_at(4);
    let before = wizard.state().clone();
    assert_eq!(wizard.advance(), Ok(Advance::Finished));
    assert_eq!(wizard.state(), &before);
}

#[test]
fn test_advance_succeeds_iff_step_complete() {
    let record = complete_record();
    for (i, step) in brand_steps().iter().enumerate().take(4) {
        let mut wizard = controller_at(i);
        assert!(step.is_complete(&record));
        assert!(wizard.advance().is_ok(), "step {} should pass", step.title);
    }
}

// ============================================================================
// Retreat
// ============================================================================

#[test]
fn test_retreat_from_first_step_exits() {
    let mut wizard = WizardController::brand();
    assert_eq!(wizard.retreat(), Retreat::Exit);
    assert_eq!(wizard.current_index(), 0);
}

#[test]
fn test_retreat_keeps_data() {
    let mut wizard = controller_at(2);
    let data = wizard.data().clone();

    assert_eq!(wizard.retreat(), Retreat::Moved(1));
    assert_eq!(wizard.data(), &data);
    assert_eq!(wizard.current_step().title, "Brand Identity");
}

#[test]
fn test_retreat_never_validates() {
    let mut wizard = controller_at(3);
    wizard.update_data(BrandPatch::new().vision(""));
    assert_eq!(wizard.retreat(), Retreat::Moved(2));
    assert_eq!(wizard.retreat(), Retreat::Moved(1));
}

// ============================================================================
// Data, reset and progress
// ============================================================================

#[test]
fn test_update_data_merges_only_given_fields() {
    let mut wizard = WizardController::brand();
    wizard.update_data(BrandPatch::new().name("GreenVault").tagline("Secure"));
    wizard.update_data(BrandPatch::new().tone("Trustworthy"));

    let data = wizard.data();
    assert_eq!(data.name, "GreenVault");
    assert_eq!(data.tagline, "Secure");
    assert_eq!(data.tone, "Trustworthy");
    assert_eq!(data.colors, ColorSet::default());
}

#[test]
fn test_update_data_never_moves() {
    let mut wizard = controller_at(1);
    wizard.update_data(BrandPatch::new().name(""));
    assert_eq!(wizard.current_index(), 1);
}

#[test]
fn test_reset_returns_to_defaults() {
    let mut wizard = controller_at(4);
    wizard.reset();
    assert_eq!(wizard.current_index(), 0);
    assert_eq!(wizard.data(), &BrandRecord::default());
}

#[test]
fn test_reset_twice_matches_reset_once() {
    let mut once = controller_at(3);
    let mut twice = controller_at(3);
    once.reset();
    twice.reset();
    twice.reset();
    assert_eq!(once.state(), twice.state());
    assert_eq!(once.progress_fraction(), twice.progress_fraction());
    assert_eq!(twice.current_index(), 0);
}

#[test]
fn test_progress_fraction() {
    let wizard = WizardController::brand();
    assert!((wizard.progress_fraction() - 0.2).abs() < 1e-9);
    assert_eq!(wizard.progress_fraction(), wizard.progress_fraction());

    let wizard = controller_at(4);
    assert!((wizard.progress_fraction() - 1.0).abs() < 1e-9);
}

#[test]
fn test_index_stays_in_range() {
    let mut wizard = controller_at(0);
    let ops: [fn(&mut WizardController); 3] = [
        |w| {
            let _ = w.advance();
        },
        |w| {
            let _ = w.retreat();
        },
        |w| w.reset(),
    ];
    for i in 0..60 {
        // Uneven mix of operations, advancing more often than retreating
        let op = ops[(i * 7 + i / 3) % ops.len()];
        op(&mut wizard);
        if i % 5 == 0 {
            wizard.update_data(BrandPatch {
                vision: Some("v".repeat(60)),
                name: Some("N".into()),
                logo_url: Some("u".into()),
                ..Default::default()
            });
        }
        assert!(wizard.current_index() < wizard.step_count());
    }
}

// ============================================================================
// Stale fills
// ============================================================================

#[test]
fn test_fill_applies_on_same_visit() {
    let mut wizard = controller_at(1);
    let ticket = wizard.begin_fill();
    assert!(wizard.apply_fill(ticket, BrandPatch::new().name("EcoFlow")));
    assert_eq!(wizard.data().name, "EcoFlow");
}

#[test]
fn test_fill_discarded_after_retreat() {
    let mut wizard = controller_at(1);
    let ticket = wizard.begin_fill();
    wizard.retreat();

    assert!(!wizard.apply_fill(ticket, BrandPatch::new().name("Late")));
    assert_eq!(wizard.data().name, "EcoFlow");
}

#[test]
fn test_fill_discarded_after_leaving_and_returning() {
    let mut wizard = controller_at(1);
    let ticket = wizard.begin_fill();
    wizard.retreat();
    wizard.advance().unwrap();

    // Same index, different visit
    assert_eq!(wizard.current_index(), ticket.step_index());
    assert!(!wizard.is_current(ticket));
}

#[test]
fn test_fill_discarded_after_reset() {
    let mut wizard = WizardController::brand();
    let ticket = wizard.begin_fill();
    wizard.reset();
    assert!(!wizard.apply_fill(ticket, BrandPatch::new().vision("late")));
    assert_eq!(wizard.data().vision, "");
}

// ============================================================================
// Custom step tables
// ============================================================================

#[test]
fn test_custom_step_table() {
    fn has_name(record: &BrandRecord) -> bool {
        !record.name.is_empty()
    }
    fn always(_: &BrandRecord) -> bool {
        true
    }

    let steps = vec![
        StepDefinition {
            id: 1,
            title: "Name",
            description: "Pick a name",
            requirement: "Name required",
            is_complete: has_name,
        },
        StepDefinition {
            id: 2,
            title: "Done",
            description: "",
            requirement: "",
            is_complete: always,
        },
    ];
    let mut wizard = WizardController::new(steps);
    assert!(wizard.advance().is_err());
    wizard.update_data(BrandPatch::new().name("x"));
    assert_eq!(wizard.advance(), Ok(Advance::Moved(1)));
    assert_eq!(wizard.advance(), Ok(Advance::Finished));
    assert!((wizard.progress_fraction() - 1.0).abs() < 1e-9);
}
