//! BrandForge CLI
//!
//! Runs the branding wizard as a terminal UI, or non-interactively with
//! `--no-tui`, and prints the finished brand kit.

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing::{error, info};

use brandforge::cli::{
    confirm_step, run_export, run_headless, run_wizard, Cli, Commands, WizardResult,
};
use brandforge::report::{BrandKitSummary, ExportTier};
use brandforge::studio::EXAMPLE_VISIONS;
use brandforge::utils::{init_logging, print_banner, print_completion, truncate_string};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_dir.as_deref()) {
        eprintln!("Warning: {:#}", e);
    }
    info!(version = env!("CARGO_PKG_VERSION"), "brandforge starting");

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Examples => {
                print_examples();
                Ok(())
            }
        };
    }

    let result = if cli.no_tui {
        run_headless(&cli).map(|record| WizardResult::Completed(Box::new(record)))
    } else {
        run_wizard(&cli)
    };

    let record = match result {
        Ok(WizardResult::Completed(record)) => record,
        Ok(WizardResult::Quit) => {
            println!("Cancelled by user.");
            return Ok(());
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "wizard failed");
            return Err(e);
        }
    };

    let summary = BrandKitSummary::from_record(&record);
    if cli.json {
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    summary.display();

    let export = if cli.no_tui {
        cli.export
    } else {
        println!();
        confirm_step("Export the basic brand kit now?")?
    };
    if export {
        println!();
        run_export(&record, ExportTier::Basic, cli.delays());
    }

    print_completion(&record.name);
    Ok(())
}

fn print_examples() {
    println!();
    println!(
        "    {} {}",
        style("💡").yellow(),
        style("Need inspiration? Try one of these:").white().bold()
    );
    for (i, vision) in EXAMPLE_VISIONS.iter().enumerate() {
        println!();
        println!(
            "    {} {}",
            style(format!("{}.", i + 1)).cyan().bold(),
            truncate_string(vision, 200)
        );
    }
    println!();
}
