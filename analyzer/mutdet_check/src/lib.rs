//! Mutability checkers and the machinery that runs them.
//!
//! This crate provides:
//! - The finding taxonomy (`MutableReason`, `Location`, `Finding`)
//! - The checker contract (`MutabilityChecker`) and every checker variant
//! - The canonical checker list (`CheckerRegistry`)
//! - The failure-isolating runner (`CheckerRunner`)
//! - The orchestrator (`AllChecksRunner`) producing `AnalysisResult`s
//!
//! # Architecture
//!
//! ```text
//! ClassFacts ──► AllChecksRunner
//!                    │  CheckerRegistry::CANONICAL (ordered)
//!                    ▼
//!               CheckerRunner ──► checker 1 ─┐
//!                    │            checker 2 ─┼─► Vec<Finding>
//!                    │            ...       ─┘
//!                    ▼
//!               AnalysisResult
//! ```

pub mod checkers;
mod config;
mod orchestrator;
mod reason;
mod registry;
mod runner;

pub use checkers::{CheckContext, CheckerError, CheckerKind, MutabilityChecker};
pub use config::AnalysisConfig;
pub use orchestrator::{AllChecksRunner, AnalysisResult, Verdict};
pub use reason::{Finding, Location, MutableReason};
pub use registry::{CheckerRegistry, CHECKER_SET_VERSION};
pub use runner::CheckerRunner;
