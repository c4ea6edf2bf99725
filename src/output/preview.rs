//! Console preview of a finished scrape

use crate::record::ResultSet;

/// Records shown in the preview
pub const PREVIEW_LIMIT: usize = 3;

/// Formats the first `limit` records plus a total count
///
/// # Arguments
///
/// * `results` - The finished result set
/// * `limit` - Maximum number of records to show
///
/// # Returns
///
/// A multi-line string ready to print
pub fn format_preview(results: &ResultSet, limit: usize) -> String {
    let mut out = String::new();

    out.push_str("Scraped Products Preview:\n");

    for (i, record) in results.first_n(limit).iter().enumerate() {
        out.push_str(&format!("\nProduct {}:\n", i + 1));
        out.push_str(&format!("Name: {}\n", record.name));
        out.push_str(&format!("Price: ${:.2}\n", record.price));
        out.push_str(&format!(
            "Category: {}\n",
            record.category.as_deref().unwrap_or("None")
        ));
        out.push_str(&format!("Rating: {:.1}/5\n", record.rating));
    }

    out.push_str(&format!("\nTotal products scraped: {}\n", results.len()));
    out.push_str("Use --csv or --json flags to export data\n");

    out
}

/// Prints the standard preview to stdout
pub fn print_preview(results: &ResultSet) {
    println!("\n{}", format_preview(results, PREVIEW_LIMIT));
}
