//! Non-interactive wizard run
//!
//! Drives the same [`WizardController`] as the TUI, picking suggestions by
//! their 1-based position and showing spinners for the simulated delays.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::info;

use super::args::Cli;
use super::prompts::prompt_vision;
use crate::studio::{BrandStudio, GenerationDelays, MockStudio};
use crate::utils::{print_step_header, print_success, spin_for};
use crate::wizard::{Advance, BrandPatch, BrandRecord, WizardController};

/// Run all five steps from command-line choices and return the finished record
pub fn run_headless(cli: &Cli) -> Result<BrandRecord> {
    let vision = match cli.initial_vision()? {
        Some(vision) => vision,
        None => prompt_vision()?,
    };
    run_with(&MockStudio, cli.delays(), &vision, cli, !cli.json)
}

/// Headless run against any studio. `verbose` prints step headers and spinners.
pub fn run_with(
    studio: &dyn BrandStudio,
    delays: GenerationDelays,
    vision: &str,
    cli: &Cli,
    verbose: bool,
) -> Result<BrandRecord> {
    let mut wizard = WizardController::brand();
    let wait = |message: &str, delay: Duration, done: &str| {
        if verbose {
            spin_for(message, delay, done);
        } else if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    };
    let header = |wizard: &WizardController| {
        if verbose {
            let step = wizard.current_step();
            print_step_header(step.id as usize, step.title);
        }
    };

    // Vision
    header(&wizard);
    wizard.update_data(BrandPatch::new().vision(vision));
    next(&mut wizard)?;

    // Identity
    header(&wizard);
    let set = studio.identities(vision);
    wait(
        "Generating brand suggestions...",
        delays.identities,
        "Suggestions ready",
    );
    let suggestion = pick(&set.suggestions, cli.identity, "identity")?;
    wizard.update_data(
        BrandPatch::new()
            .name(suggestion.name.clone())
            .tagline(suggestion.tagline.clone())
            .tone(suggestion.tone.clone())
            .industry(set.industry.clone()),
    );
    if verbose {
        print_success(&format!("{}: \"{}\"", suggestion.name, suggestion.tagline));
    }
    next(&mut wizard)?;

    // Palette
    header(&wizard);
    let data = wizard.data();
    let schemes = studio.palettes(&data.tone, &data.industry);
    let scheme = pick(&schemes, cli.palette, "palette")?;
    wizard.update_data(BrandPatch::new().colors(scheme.colors.clone()));
    if verbose {
        print_success(&format!("{} ({})", scheme.name, scheme.mood));
    }
    next(&mut wizard)?;

    // Logo
    header(&wizard);
    let logos = studio.logos();
    wait(
        "Designing logo concepts...",
        delays.logos,
        "Logo concepts ready",
    );
    let logo = pick(&logos, cli.logo, "logo")?;
    wizard.update_data(BrandPatch::new().logo_url(logo.url.clone()));
    if verbose {
        print_success(&format!("{} logo", logo.style));
    }
    next(&mut wizard)?;

    // Brand kit
    match wizard.advance() {
        Ok(Advance::Finished) => {}
        Ok(Advance::Moved(index)) => bail!("Wizard ended early at step {}", index + 1),
        Err(e) => return Err(e.into()),
    }

    info!(name = %wizard.data().name, "Headless run complete");
    Ok(wizard.data().clone())
}

fn next(wizard: &mut WizardController) -> Result<()> {
    let title = wizard.current_step().title;
    wizard
        .advance()
        .with_context(|| format!("Cannot continue past {}", title))?;
    Ok(())
}

/// 1-based selection from generated options
pub fn pick<'a, T>(options: &'a [T], choice: usize, what: &str) -> Result<&'a T> {
    if choice == 0 || choice > options.len() {
        bail!(
            "Invalid {} choice {}: pick a number from 1 to {}",
            what,
            choice,
            options.len()
        );
    }
    Ok(&options[choice - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const VISION: &str = "A sustainable marketplace connecting local farmers with eco-conscious restaurants.";

    #[test]
    fn test_pick_is_one_based() {
        let items = ["a", "b", "c"];
        assert_eq!(*pick(&items, 1, "x").unwrap(), "a");
        assert_eq!(*pick(&items, 3, "x").unwrap(), "c");
        assert!(pick(&items, 0, "x").is_err());
        assert!(pick(&items, 4, "x").is_err());
    }

    #[test]
    fn test_headless_run_with_choices() {
        let cli = Cli::parse_from(["brandforge", "--no-tui", "--identity", "2", "--logo", "3"]);
        let record =
            run_with(&MockStudio, GenerationDelays::instant(), VISION, &cli, false).unwrap();
        assert_eq!(record.name, "GreenVault");
        assert_eq!(record.industry, "Sustainability");
        assert_eq!(record.vision, VISION);
        assert!(record.logo_url.is_some());
    }

    #[test]
    fn test_short_vision_is_rejected() {
        let cli = Cli::parse_from(["brandforge", "--no-tui"]);
        let err = run_with(&MockStudio, GenerationDelays::instant(), "too short", &cli, false)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Minimum 50 characters required"));
    }

    #[test]
    fn test_out_of_range_palette() {
        let cli = Cli::parse_from(["brandforge", "--no-tui", "--palette", "9"]);
        let err = run_with(&MockStudio, GenerationDelays::instant(), VISION, &cli, false)
            .unwrap_err();
        assert!(err.to_string().contains("palette"));
    }
}
