//! Console output utilities
//!
//! Section banners for the pipeline's human-readable console output.

/// Width of a regular section banner
pub const SECTION_WIDTH: usize = 50;

/// Width of a report banner
pub const REPORT_WIDTH: usize = 60;

/// Render a banner: a rule, the title, and another rule
#[must_use]
pub fn banner(title: &str, width: usize) -> String {
    let rule = "=".repeat(width);
    format!("{rule}\n{title}\n{rule}")
}

/// Print a section banner preceded by a blank line
pub fn print_section(title: &str) {
    println!("\n{}", banner(title, SECTION_WIDTH));
}
