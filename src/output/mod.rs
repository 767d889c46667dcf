//! Report formatting
//!
//! Turns the walker's stream of directories and files into the plain-text
//! report: header, one block per node, and the exclusion trailer.

mod report;

pub use report::ReportFormatter;
