//! Catalog ingress.
//!
//! The card loader (remote download, on-disk cache, images) lives outside
//! the engine. What crosses the boundary is a JSON array of card records in
//! the catalog's field names:
//!
//! ```json
//! [{ "id": 46986414, "name": "Dark Magician", "atk": 2500, "def": 2100,
//!    "level": 7, "attribute": "DARK", "race": "Spellcaster" }]
//! ```
//!
//! Missing optional fields get the catalog defaults. A record without an
//! `id` or with an unknown attribute rejects the whole catalog, so a bad
//! file never reaches a running match.

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use super::attributes::Attribute;
use super::definition::{CardDefinition, CatalogId};
use super::pool::CardPool;
use crate::core::error::SetupError;

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: Option<u32>,
    name: Option<String>,
    atk: Option<u32>,
    def: Option<u32>,
    level: Option<u8>,
    attribute: Option<String>,
    race: Option<String>,
}

impl CatalogRecord {
    fn into_definition(self, index: usize) -> Result<CardDefinition, SetupError> {
        let id = self
            .id
            .map(CatalogId::new)
            .ok_or_else(|| SetupError::Catalog(format!("record {index} has no id")))?;

        let attribute = match self.attribute {
            Some(raw) => raw
                .parse::<Attribute>()
                .map_err(|e| SetupError::Catalog(format!("record {index}: {e}")))?,
            None => Attribute::Dark,
        };

        Ok(CardDefinition::new(
            id,
            self.name.unwrap_or_else(|| "Unknown".to_string()),
            self.atk.unwrap_or(0),
            self.def.unwrap_or(0),
        )
        .with_level(self.level.unwrap_or(1))
        .with_attribute(attribute)
        .with_type(self.race.unwrap_or_else(|| "Warrior".to_string())))
    }
}

/// Parse a JSON array of catalog records into definitions.
pub fn parse_definitions(json: &str) -> Result<Vec<CardDefinition>, SetupError> {
    let records: Vec<CatalogRecord> =
        serde_json::from_str(json).map_err(|e| SetupError::Catalog(e.to_string()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_definition(index))
        .collect()
}

/// The two pools a match is built from.
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    /// Cards decks are dealt from.
    pub normal: CardPool,
    /// Cards only reachable as fusion results.
    pub fusion: CardPool,
}

impl CardCatalog {
    #[must_use]
    pub fn new(normal: CardPool, fusion: CardPool) -> Self {
        Self { normal, fusion }
    }

    /// Parse both pools from catalog JSON.
    pub fn from_json(normal_json: &str, fusion_json: &str) -> Result<Self, SetupError> {
        let normal = CardPool::new(parse_definitions(normal_json)?);
        let fusion = CardPool::new(parse_definitions(fusion_json)?);
        debug!(
            normal = normal.len(),
            fusion = fusion.len(),
            "catalog parsed"
        );
        Ok(Self { normal, fusion })
    }

    /// Statistics over the normal pool.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::of(&self.normal)
    }
}

/// Counts of a pool by attribute and creature type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub by_attribute: Vec<(Attribute, usize)>,
    /// Most common first.
    pub by_type: Vec<(String, usize)>,
}

impl CatalogSummary {
    #[must_use]
    pub fn of(pool: &CardPool) -> Self {
        Self {
            total: pool.len(),
            by_attribute: pool.attribute_counts().into_iter().collect(),
            by_type: pool.type_counts(),
        }
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total: {}", self.total)?;
        writeln!(f, "Attributes:")?;
        for (attribute, count) in &self.by_attribute {
            writeln!(f, "  {attribute}: {count}")?;
        }
        writeln!(f, "Types:")?;
        for (name, count) in self.by_type.iter().take(10) {
            writeln!(f, "  {name}: {count}")?;
        }
        Ok(())
    }
}
