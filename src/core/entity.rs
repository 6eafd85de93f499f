//! Card instance identification.
//!
//! Every card a player holds carries a `CardUid`, minted by that player when
//! the card enters play (deck build or fusion result).
//!
//! ## Uniqueness
//!
//! Uids are unique within one player's zones, not across the match. Commands
//! always say which side a uid belongs to (attacker on the actor's field,
//! target on the opponent's), so per-player uniqueness is enough.
//!
//! Cloning a `Player` preserves every uid, which is what lets the search refer
//! to "the same" card in a hypothetical future without matching by name.
//!
//! ```
//! use fusion_duel::core::CardUid;
//!
//! let first = CardUid::new(0);
//! assert_eq!(first.next(), CardUid::new(1));
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for one card instance owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    /// Create a uid from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The uid minted after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardUid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
