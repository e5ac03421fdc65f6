//! Simulated brand kit export for the plain terminal flow

use tracing::info;

use crate::report::ExportTier;
use crate::studio::GenerationDelays;
use crate::utils::{print_info, spin_for};
use crate::wizard::BrandRecord;

/// Pretend to package the kit; nothing is written to disk
pub fn run_export(record: &BrandRecord, tier: ExportTier, delays: GenerationDelays) {
    info!(name = %record.name, tier = tier.label(), "Simulated export");
    spin_for(
        &format!("Exporting {} brand kit...", tier.label()),
        delays.export,
        &format!("Brand kit exported as {}!", tier.format().to_uppercase()),
    );
    if tier == ExportTier::Basic {
        print_info("Upgrade to Premium for vector files and print-ready assets");
    }
}
