//! Print formats sold through checkout.

use serde::{Deserialize, Serialize};

/// Print size of an artwork. The price is fixed per size; clients never send prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintSize {
    Small,
    Medium,
    Large,
}

impl PrintSize {
    /// Unit price in the smallest currency unit (cents).
    pub fn unit_price_cents(self) -> u64 {
        match self {
            Self::Small => 4_900,
            Self::Medium => 8_900,
            Self::Large => 14_900,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small print (30x40 cm)",
            Self::Medium => "Medium print (50x70 cm)",
            Self::Large => "Large print (70x100 cm)",
        }
    }
}
