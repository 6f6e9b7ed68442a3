use serde::{Deserialize, Serialize};

use super::record::Tier;

// ---------------------------------------------------------------------------
// AggregateStats - Catalog-wide averages
// ---------------------------------------------------------------------------

/// Averages over the whole catalog, independent of any active filter.
///
/// Prices are rounded to 2 decimals, percentages to 1. An average is `None`
/// when no record defines the underlying field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AggregateStats {
    pub total_count: usize,
    pub avg_net_ils: Option<f64>,
    pub avg_transport_ils: Option<f64>,
    pub avg_wholesale: Option<f64>,
    pub avg_club: Option<f64>,
    pub avg_retail: Option<f64>,
    pub avg_margin_wholesale_pct: Option<f64>,
    pub avg_margin_club_pct: Option<f64>,
    pub avg_margin_retail_pct: Option<f64>,
}

impl AggregateStats {
    pub fn avg_price(&self, tier: Tier) -> Option<f64> {
        match tier {
            Tier::Wholesale => self.avg_wholesale,
            Tier::Club => self.avg_club,
            Tier::Retail => self.avg_retail,
        }
    }

    pub fn avg_margin_pct(&self, tier: Tier) -> Option<f64> {
        match tier {
            Tier::Wholesale => self.avg_margin_wholesale_pct,
            Tier::Club => self.avg_margin_club_pct,
            Tier::Retail => self.avg_margin_retail_pct,
        }
    }
}

// ---------------------------------------------------------------------------
// GroupSummary - Count (and optional margin) for one group key
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GroupSummary {
    pub key: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_margin_pct: Option<f64>,
}

// ---------------------------------------------------------------------------
// TierSummary - Average cost breakdown and sale figures for one tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TierSummary {
    pub tier: Tier,
    pub net_ils: Option<f64>,
    pub net_usd: Option<f64>,
    pub transport_ils: Option<f64>,
    pub transport_usd: Option<f64>,
    pub total_ils: Option<f64>,
    pub total_usd: Option<f64>,
    pub avg_price: Option<f64>,
    pub avg_margin_pct: Option<f64>,
}
