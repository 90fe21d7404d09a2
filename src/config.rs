/// How selected files reach the output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

/// Fully-resolved run configuration, built once before any file is touched.
///
/// `resolve` encodes the flag implications in one place: `select_all` turns
/// on both `select_one` and `copy_unique`, and requesting any selection
/// turns on materialization. Nothing else mutates the mode flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Descend into subdirectories while scanning
    pub recursive: bool,
    /// Copy/move selected files into the output directory at all
    pub materialize: bool,
    /// One representative per duplicate group
    pub select_one: bool,
    /// Files without any duplicate
    pub copy_unique: bool,
    /// select_one and copy_unique combined
    pub select_all: bool,
    /// Copy (default) or move selected files
    pub transfer: TransferMode,
}

impl Config {
    pub fn resolve(
        move_files: bool,
        no_recursive: bool,
        select_one: bool,
        copy_unique: bool,
        select_all: bool,
        relocate: bool,
    ) -> Self {
        let select_one = select_one || select_all;
        let copy_unique = copy_unique || select_all;

        Self {
            recursive: !no_recursive,
            materialize: move_files || select_one || copy_unique,
            select_one,
            copy_unique,
            select_all,
            transfer: if relocate {
                TransferMode::Move
            } else {
                TransferMode::Copy
            },
        }
    }
}
