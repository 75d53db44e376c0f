use async_graphql::Enum;
use serde::{Deserialize, Serialize};

const RATE_MARKERS: [&str; 3] = ["rate", "conversion", "%"];
const AMOUNT_MARKERS: [&str; 5] = ["collection", "amount", "aum", "pos", "mtd"];

/// Returns `true` if the column holds a percentage or ratio.
pub(crate) fn is_rate_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    RATE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Returns `true` if the column holds a currency or count magnitude.
pub(crate) fn is_amount_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    AMOUNT_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ColumnKind {
    Rate,
    Amount,
    Plain,
}

impl ColumnKind {
    /// Classifies a column by name. A name matching both heuristics is a rate.
    pub(crate) fn of(name: &str) -> Self {
        if is_rate_column(name) {
            Self::Rate
        } else if is_amount_column(name) {
            Self::Amount
        } else {
            Self::Plain
        }
    }
}
