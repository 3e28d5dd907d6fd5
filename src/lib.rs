pub mod diagnosis; // pattern matching + Eight Principles classification
pub mod models;

pub use diagnosis::engine::DefaultDiagnosticEngine;
pub use diagnosis::types::{
    AnalysisResult, DiagnosticEngine, DiagnosticReport, PatternMatch, TcmProfile,
};
pub use models::record::{ClinicalRecord, ClinicalRecordBuilder};
