pub mod cell;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod io;
pub mod overrides;
pub mod paths;
pub mod plan;
pub mod report;
pub mod types;
pub mod workbook;

pub use error::{PlaybookError, Result};
