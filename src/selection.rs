use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::grouping::ScanOutcome;

/// One pending materialization: copy/move `source` into `dest_dir`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputAction {
    pub source: PathBuf,
    pub dest_dir: PathBuf,
}

/// Decide which files get materialized into `output_dir`.
///
/// Per duplicate group: with select-one (or select-all) only the first
/// member is taken; with copy-unique alone the group contributes nothing;
/// with neither, the extras (everything but the first member) are taken.
/// Uniques are taken iff copy-unique or select-all is on. With
/// materialization disabled the plan is empty regardless of the other flags.
///
/// Actions come out in a deterministic order: groups in enumeration order,
/// then uniques in enumeration order. Each source appears at most once.
pub fn plan_actions(outcome: &ScanOutcome, config: &Config, output_dir: &Path) -> Vec<OutputAction> {
    if !config.materialize {
        return Vec::new();
    }

    let mut actions = Vec::new();
    let mut push = |source: &PathBuf| {
        actions.push(OutputAction {
            source: source.clone(),
            dest_dir: output_dir.to_path_buf(),
        });
    };

    for group in &outcome.groups {
        if config.select_one || config.select_all {
            push(&group.files[0]);
        } else if !config.copy_unique {
            for extra in &group.files[1..] {
                push(extra);
            }
        }
    }

    if config.copy_unique || config.select_all {
        for unique in &outcome.uniques {
            push(unique);
        }
    }

    actions
}
