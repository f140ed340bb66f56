//! Output formatting utilities

use crate::application::AliasListing;
use crate::domain::TagAssignment;

/// Render resolved assignments as a single space-joined token list,
/// ready to hand to a downstream tagging tool.
pub fn format_assignments(assignments: &[TagAssignment]) -> String {
    assignments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Format `alias > expansion` rows for display
pub fn format_alias_table(listings: &[AliasListing]) -> String {
    if listings.is_empty() {
        return "No aliases defined".to_string();
    }

    let mut output = String::new();
    for listing in listings {
        output.push_str(&format!(
            "{:>20}    > {}\n",
            listing.name,
            listing.expansion.join(" ")
        ));
    }
    output
}

/// Format alias names only, one per line
pub fn format_alias_names(listings: &[AliasListing]) -> String {
    if listings.is_empty() {
        return "No aliases defined".to_string();
    }

    let mut output = String::new();
    for listing in listings {
        output.push_str(&listing.name);
        output.push('\n');
    }
    output
}
