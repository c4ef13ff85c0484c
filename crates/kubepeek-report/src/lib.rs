//! Cluster report for kubepeek
//!
//! This crate runs the fixed query sequence against a cluster and writes the
//! human-readable report as each answer arrives.

mod report;

pub use report::{Report, ReportError, ReportOptions};

// Re-export types used in our public API
pub use kubepeek_types::LinkedModule;
