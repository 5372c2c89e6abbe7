use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File name constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "playbook.yaml";
pub const DEFAULT_PLAYPACK_FILE: &str = "SEO_PreMade_Plays_By_Client_Profile_v2.xlsx";
pub const REPORT_FILE_SUFFIX: &str = "_SEO_Action_Plan_Prototype.docx";

/// Characters that may not appear in a file name on some platform.
const RESERVED_FILE_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Relative paths are taken from the project root; absolute ones are kept.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// A single path component: separators and reserved characters in the client
/// name become `_`, so the report always lands directly in the output dir.
pub fn report_file_name(client_name: &str) -> String {
    let stem: String = client_name
        .chars()
        .map(|c| {
            if RESERVED_FILE_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("{stem}{REPORT_FILE_SUFFIX}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
