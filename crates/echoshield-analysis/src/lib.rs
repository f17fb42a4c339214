//! EchoShield Analysis Engine
//!
//! Stateless claim analysis: misinformation detection, topic clustering,
//! verification against trusted sources and summary rendering.
//!
//! # Architecture
//!
//! The classification rules (keywords, topic priority, status thresholds,
//! summary templates) are fixed. Everything a real analysis model would
//! decide is delegated to a [`Scorer`](echoshield_domain::traits::Scorer):
//!
//! - `RandomScorer`: Uniform draws, the production placeholder
//! - `ScriptedScorer`: Deterministic scores for tests
//!
//! # Examples
//!
//! ```
//! use echoshield_analysis::{AnalysisEngine, ScriptedScorer};
//! use echoshield_domain::{ClaimId, TrustedSources, VerificationStatus};
//!
//! let engine = AnalysisEngine::new(ScriptedScorer::new(80));
//! let sources = TrustedSources::default();
//!
//! let result = engine.verify_claim(ClaimId::new(1), "Water is wet", sources.as_slice());
//! assert_eq!(result.status, VerificationStatus::True);
//! assert_eq!(result.sources_consulted.len(), 3);
//!
//! let summary = engine.generate_summary("Water is wet", &result);
//! assert!(summary.starts_with("✅ VERIFIED"));
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod keywords;
pub mod scorer;
pub mod summary;

pub use engine::AnalysisEngine;
pub use scorer::{RandomScorer, ScriptedScorer};
