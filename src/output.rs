use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::grouping::ScanOutcome;
use crate::util::format_number;

/// Counters for one scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanStats {
    /// Candidate images enumerated under the input root
    pub total_images: usize,
    /// Images successfully fingerprinted
    pub processed: usize,
    /// Images that failed to decode
    pub failed: usize,
    /// Files beyond the first in each duplicate group
    pub duplicates: usize,
    pub duplicate_groups: usize,
    pub unique_images: usize,
}

/// One duplicate group for output, fingerprint rendered as hex
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub fingerprint: String,
    pub files: Vec<PathBuf>,
}

/// Complete report of one scan
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateReport {
    pub stats: ScanStats,
    pub groups: Vec<GroupReport>,
    pub uniques: Vec<PathBuf>,
}

impl DuplicateReport {
    pub fn from_outcome(outcome: &ScanOutcome) -> Self {
        let stats = ScanStats {
            total_images: outcome.total_images,
            processed: outcome.processed,
            failed: outcome.failed,
            duplicates: outcome.duplicate_count(),
            duplicate_groups: outcome.groups.len(),
            unique_images: outcome.uniques.len(),
        };

        let groups = outcome
            .groups
            .iter()
            .map(|group| GroupReport {
                fingerprint: group.fingerprint.to_hex().to_string(),
                files: group.files.clone(),
            })
            .collect();

        Self {
            stats,
            groups,
            uniques: outcome.uniques.clone(),
        }
    }

    /// Human-readable colored report: group listings plus a summary block
    pub fn print_human(&self, materialize: bool) {
        for (i, group) in self.groups.iter().enumerate() {
            println!(
                "\n{} {} ({} files)",
                format!("Group {}:", format_number(i + 1)).bold(),
                &group.fingerprint[..12],
                format_number(group.files.len()).cyan()
            );

            for (n, path) in group.files.iter().enumerate() {
                println!("  {}. {}", n + 1, path.display());
            }
        }

        println!("\n{}", "Summary".bold().underline());
        println!(
            "  Total images: {}",
            format_number(self.stats.total_images).cyan()
        );
        println!(
            "  Duplicates: {} in {} groups",
            format_number(self.stats.duplicates).cyan(),
            format_number(self.stats.duplicate_groups).cyan()
        );
        println!(
            "  Unique images: {}",
            format_number(self.stats.unique_images).cyan()
        );
        if self.stats.failed > 0 {
            println!("  Failed to read: {}", format_number(self.stats.failed).yellow());
        }

        if !materialize {
            println!(
                "\n{}",
                "Use --move, --select-one, --copy-unique, or --select-all to copy images into the output directory."
                    .dimmed()
            );
        }
    }

    /// Machine-readable report on stdout
    pub fn print_json(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
    }
}
