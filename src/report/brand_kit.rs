//! Brand kit summary report generation

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::studio::fallback_logo_url;
use crate::wizard::BrandRecord;

/// Export packages offered on the brand kit step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExportTier {
    Basic,
    Premium,
}

impl ExportTier {
    pub fn label(self) -> &'static str {
        match self {
            ExportTier::Basic => "Basic",
            ExportTier::Premium => "Premium",
        }
    }

    /// Nominal package format
    pub fn format(self) -> &'static str {
        match self {
            ExportTier::Basic => "pdf",
            ExportTier::Premium => "zip",
        }
    }

    /// Package contents; `false` marks items the tier leaves out
    pub fn includes(self) -> &'static [(&'static str, bool)] {
        match self {
            ExportTier::Basic => &[
                ("Logo in PNG format", true),
                ("Color palette", true),
                ("Basic brand guidelines", true),
                ("Vector files", false),
                ("Multiple logo variations", false),
                ("Print-ready files", false),
            ],
            ExportTier::Premium => &[
                ("All logo variations (PNG, SVG, PDF)", true),
                ("Complete color palette", true),
                ("Comprehensive brand guidelines", true),
                ("Typography recommendations", true),
                ("Business card templates", true),
                ("Social media kit", true),
                ("Commercial usage rights", true),
            ],
        }
    }
}

/// Final brand kit, ready for display or JSON output
#[derive(Debug, Clone, Serialize)]
pub struct BrandKitSummary {
    #[serde(flatten)]
    pub record: BrandRecord,
}

impl BrandKitSummary {
    pub fn from_record(record: &BrandRecord) -> Self {
        Self {
            record: record.clone(),
        }
    }

    /// Logo URL, or the placeholder when none was chosen
    pub fn logo_url(&self) -> &str {
        self.record
            .logo_url
            .as_deref()
            .unwrap_or(fallback_logo_url())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize brand kit")
    }

    /// Kit card as a two-column table
    pub fn table(&self) -> Table {
        let r = &self.record;
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Element").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("✨ Name"),
            Cell::new(&r.name).add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("💬 Tagline"),
            Cell::new(format!("\"{}\"", r.tagline)),
        ]);
        table.add_row(vec![Cell::new("🎭 Tone"), Cell::new(&r.tone)]);
        table.add_row(vec![Cell::new("🏢 Industry"), Cell::new(&r.industry)]);

        for (label, hex) in r.colors.labeled() {
            let cell = match hex_to_rgb(hex) {
                Some((red, green, blue)) => Cell::new(format!("██ {}", hex)).fg(Color::Rgb {
                    r: red,
                    g: green,
                    b: blue,
                }),
                None => Cell::new(hex),
            };
            table.add_row(vec![Cell::new(format!("🎨 {}", label)), cell]);
        }

        table.add_row(vec![
            Cell::new("🔤 Heading font"),
            Cell::new(&r.fonts.primary),
        ]);
        table.add_row(vec![
            Cell::new("🔤 Body font"),
            Cell::new(&r.fonts.secondary),
        ]);
        table.add_row(vec![
            Cell::new("🖼️  Logo"),
            Cell::new(self.logo_url()).fg(if r.logo_url.is_some() {
                Color::Cyan
            } else {
                Color::DarkGrey
            }),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BRAND KIT").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }

        println!();
        println!(
            "    {} {}",
            style("📦").cyan(),
            style("EXPORT OPTIONS").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        for tier in [ExportTier::Basic, ExportTier::Premium] {
            println!();
            println!("    {}", style(tier.label()).cyan().bold());
            for (item, included) in tier.includes() {
                if *included {
                    println!("      {} {}", style("✓").green(), item);
                } else {
                    println!("      {} {}", style("✗").dim(), style(item).dim());
                }
            }
        }
    }
}

/// Parse `#RRGGBB` into its components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#047857"), Some((0x04, 0x78, 0x57)));
        assert_eq!(hex_to_rgb("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(hex_to_rgb("047857"), None);
        assert_eq!(hex_to_rgb("#0478"), None);
        assert_eq!(hex_to_rgb("#zz0000"), None);
    }

    #[test]
    fn test_logo_fallback() {
        let summary = BrandKitSummary::from_record(&BrandRecord::default());
        assert_eq!(summary.logo_url(), fallback_logo_url());
    }

    #[test]
    fn test_json_is_flat_record() {
        let record = BrandRecord {
            name: "EcoFlow".to_string(),
            ..Default::default()
        };
        let json = BrandKitSummary::from_record(&record).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "EcoFlow");
        assert_eq!(value["colors"]["primary"], "#6366f1");
        assert!(value.get("record").is_none());
    }

    #[test]
    fn test_table_lists_every_color() {
        let text = BrandKitSummary::from_record(&BrandRecord::default())
            .table()
            .to_string();
        for hex in ["#6366f1", "#f59e0b", "#ec4899", "#6b7280"] {
            assert!(text.contains(hex), "missing {}", hex);
        }
    }

    #[test]
    fn test_basic_tier_leaves_out_vectors() {
        let vectors = ExportTier::Basic
            .includes()
            .iter()
            .find(|(item, _)| *item == "Vector files");
        assert_eq!(vectors, Some(&("Vector files", false)));
        assert!(ExportTier::Premium.includes().iter().all(|(_, inc)| *inc));
    }
}
