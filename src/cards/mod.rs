//! Card system: definitions, instances, pools, and catalog ingress.
//!
//! ## Key Types
//!
//! - `CatalogId`: Identifier for printed cards
//! - `CardDefinition`: Immutable card identity and stats
//! - `Card`: A player's copy of a definition, with uid and battle position
//! - `CardPool`: Ordered definitions with name lookup
//! - `CardCatalog`: The normal and fusion-result pools a match is built from

pub mod attributes;
pub mod catalog;
pub mod definition;
pub mod instance;
pub mod pool;

pub use attributes::Attribute;
pub use catalog::{parse_definitions, CardCatalog, CatalogSummary};
pub use definition::{CardDefinition, CatalogId};
pub use instance::{Card, Position};
pub use pool::CardPool;
