//! Fusion: combining two hand cards into one stronger card.
//!
//! ## Key Types
//!
//! - `FusionTable`: Named recipes keyed on unordered name pairs
//! - `FusionResolver`: Recipe lookup with attribute, type, and generic fallbacks
//! - `FusionCandidate`: A resolvable pair from a hand

pub mod resolver;
pub mod table;

pub use resolver::{is_beneficial, FusionCandidate, FusionResolver};
pub use table::FusionTable;
