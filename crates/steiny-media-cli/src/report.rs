use std::fmt::Write as _;

use steiny_core::media::{media_status, MediaStatus};
use steiny_storage::{ObjectSummary, PurgeReport};

/// Missing keys are listed individually only up to this many
pub const MISSING_LIST_LIMIT: usize = 10;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub png: Vec<String>,
    /// Should be re-uploaded as PNG
    pub jpg: Vec<String>,
    pub other: Vec<String>,
}

impl Listing {
    pub fn group(objects: &[ObjectSummary]) -> Self {
        let mut listing = Listing::default();
        for object in objects {
            let key = object.key.clone();
            if key.ends_with(".jpg") || key.ends_with(".jpeg") {
                listing.jpg.push(key);
            } else if key.ends_with(".png") {
                listing.png.push(key);
            } else {
                listing.other.push(key);
            }
        }
        listing
    }
}

fn section(out: &mut String, title: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    let _ = writeln!(out, "{} ({}):", title, keys.len());
    for key in keys {
        let _ = writeln!(out, "   - {}", key);
    }
    let _ = writeln!(out);
}

/// Grouped listing followed by the upload status report
pub fn render_listing(bucket: &str, key_prefix: &str, objects: &[ObjectSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Listing media in bucket {}\n", bucket);

    if objects.is_empty() {
        let _ = writeln!(out, "No files found.");
    } else {
        let _ = writeln!(out, "Found {} files:\n", objects.len());
        let listing = Listing::group(objects);
        section(&mut out, "PNG files", &listing.png);
        section(&mut out, "JPG files, re-upload as PNG", &listing.jpg);
        section(&mut out, "Other files", &listing.other);
    }

    let status = media_status(key_prefix, objects.iter().map(|o| o.key.as_str()));
    render_status(&mut out, &status);
    out
}

fn render_status(out: &mut String, status: &MediaStatus) {
    let _ = writeln!(out, "Upload status:");
    let _ = writeln!(out, "  Uploaded: {} files", status.uploaded);
    let _ = writeln!(out, "  Missing:  {} files", status.missing.len());

    if !status.missing.is_empty() && status.missing.len() <= MISSING_LIST_LIMIT {
        let _ = writeln!(out, "\nMissing files:");
        for key in &status.missing {
            let _ = writeln!(out, "   - {}", key);
        }
    }
}

pub fn render_purge(report: &PurgeReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Deleted {} files", report.deleted.len());
    if !report.failed.is_empty() {
        let _ = writeln!(out, "Failed to delete {} files:", report.failed.len());
        for (key, reason) in &report.failed {
            let _ = writeln!(out, "   - {}: {}", key, reason);
        }
    }
    out
}

/// Only an explicit `yes` (any case) confirms
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
