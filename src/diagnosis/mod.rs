pub mod engine;
pub mod patterns;
pub mod principles;
pub mod rules;
pub mod signals;
pub mod types;

pub use engine::DefaultDiagnosticEngine;
pub use types::{
    AnalysisResult, DiagnosticEngine, DiagnosticReport, EightPrinciples, PatternMatch, TcmProfile,
};
