use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybookError {
    #[error("Default play pack not found at '{0}'. Make sure the XLSX is in the project root.")]
    MissingDefaultResource(String),

    #[error("not a readable spreadsheet: {0}")]
    MalformedWorkbook(String),

    #[error("no profiles found in the play pack XLSX (missing Strategy table headers)")]
    NoProfilesFound,

    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("invalid edit in row {row} ('{strategy}'): {reason}")]
    InvalidEdit {
        row: usize,
        strategy: String,
        reason: String,
    },

    #[error("could not read keyword/topic CSV: {0}")]
    Enrichment(#[from] csv::Error),

    #[error("could not write document: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PlaybookError>;
