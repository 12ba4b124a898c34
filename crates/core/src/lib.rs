#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod handler;
pub mod parser;
pub mod scan;

pub use handler::{check, evaluate, parse_range};
pub use parser::parse_bound;
pub use scan::{ScanReport, scan};
