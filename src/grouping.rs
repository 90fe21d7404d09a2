use std::collections::HashMap;
use std::path::PathBuf;

use crate::fingerprint::Fingerprint;

/// Files sharing one fingerprint, in enumeration order. Always 2+ members;
/// the first member is the group's representative.
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    pub fingerprint: Fingerprint,
    pub files: Vec<PathBuf>,
}

/// Result of indexing one scan: the partition of all successfully
/// fingerprinted files into duplicate groups and uniques, plus counters.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Groups of 2+ files with equal fingerprints, ordered by first member
    pub groups: Vec<DuplicateGroup>,
    /// Files whose fingerprint matched no other scanned file
    pub uniques: Vec<PathBuf>,
    /// Candidate files enumerated by the scanner
    pub total_images: usize,
    /// Files successfully fingerprinted
    pub processed: usize,
    /// Files that failed to decode
    pub failed: usize,
}

/// Fold (path, fingerprint) pairs into the fingerprint index and partition it.
///
/// `fingerprints` must line up with `files` (one entry per candidate, `None`
/// for decode failures). Insertion is sequential, so the first file to
/// produce a fingerprint stays first in its group. Whether an entry is a
/// duplicate group or a unique is only decided here, after the whole batch
/// has been folded in.
pub fn build_index(files: Vec<PathBuf>, fingerprints: Vec<Option<Fingerprint>>) -> ScanOutcome {
    debug_assert_eq!(files.len(), fingerprints.len());

    let total_images = files.len();
    let mut order: Vec<Fingerprint> = Vec::new();
    let mut index: HashMap<Fingerprint, Vec<PathBuf>> = HashMap::new();
    let mut failed = 0;

    for (path, fingerprint) in files.into_iter().zip(fingerprints) {
        match fingerprint {
            Some(fingerprint) => {
                index
                    .entry(fingerprint)
                    .or_insert_with(|| {
                        order.push(fingerprint);
                        Vec::new()
                    })
                    .push(path);
            }
            None => failed += 1,
        }
    }

    let mut groups = Vec::new();
    let mut uniques = Vec::new();
    let mut processed = 0;

    for fingerprint in order {
        let files = index
            .remove(&fingerprint)
            .expect("every ordered fingerprint has an index entry");
        processed += files.len();

        if files.len() > 1 {
            groups.push(DuplicateGroup { fingerprint, files });
        } else {
            uniques.extend(files);
        }
    }

    ScanOutcome {
        groups,
        uniques,
        total_images,
        processed,
        failed,
    }
}

impl ScanOutcome {
    /// Files beyond the first in each duplicate group
    pub fn duplicate_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len() - 1).sum()
    }
}
