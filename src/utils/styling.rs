//! Terminal styling for the plain (non-TUI) output

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static SPARKLES: Emoji<'_, '_> = Emoji("✨ ", "* ");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗ ██████╗  █████╗ ███╗   ██╗██████╗
    ██╔══██╗██╔══██╗██╔══██╗████╗  ██║██╔══██╗
    ██████╔╝██████╔╝███████║██╔██╗ ██║██║  ██║
    ██╔══██╗██╔══██╗██╔══██║██║╚██╗██║██║  ██║
    ██████╔╝██║  ██║██║  ██║██║ ╚████║██████╔╝
    ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝╚═════╝ forge
    "#;

    println!();
    println!("{}", style(banner).magenta().bold());
    println!(
        "    {}{}",
        SPARKLES,
        style("From vision to brand kit in five steps").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: usize, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message
pub fn print_completion(brand_name: &str) {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style(format!("{} is ready to launch!", brand_name))
            .green()
            .bold()
    );
    println!();
}

/// Shorten `s` to at most `max_len` characters, ending with "..."
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("abcdefghij", 8), "abcde...");
        // multi-byte characters count once
        assert_eq!(truncate_string("ééééé", 5), "ééééé");
    }
}
