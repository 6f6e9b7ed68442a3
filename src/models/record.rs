use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// CatalogRecord - One product as supplied by the catalog file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "modele")]
    pub model: String,
    pub description: Option<String>,
    #[serde(rename = "couleur")]
    pub color: Option<String>,
    #[serde(rename = "sexe")]
    pub gender: Option<String>,
    #[serde(rename = "sous_categorie")]
    pub category: Option<String>,

    // -- Purchase price (transport included) --
    #[serde(rename = "prix_achat_usd")]
    pub purchase_usd: Option<f64>,
    #[serde(rename = "prix_achat_ils")]
    pub purchase_ils: Option<f64>,

    // -- Sale tiers --
    #[serde(rename = "prix_grossiste")]
    pub wholesale_price: Option<f64>,
    #[serde(rename = "prix_club")]
    pub club_price: Option<f64>,
    #[serde(rename = "prix_detail")]
    pub retail_price: Option<f64>,

    // -- Margins, precomputed upstream --
    #[serde(rename = "marge_grossiste_ils")]
    pub wholesale_margin_ils: Option<f64>,
    #[serde(rename = "marge_grossiste_pct")]
    pub wholesale_margin_pct: Option<f64>,
    #[serde(rename = "marge_club_ils")]
    pub club_margin_ils: Option<f64>,
    #[serde(rename = "marge_club_pct")]
    pub club_margin_pct: Option<f64>,
    #[serde(rename = "marge_detail_ils")]
    pub retail_margin_ils: Option<f64>,
    #[serde(rename = "marge_detail_pct")]
    pub retail_margin_pct: Option<f64>,

    /// Size label to availability, in catalog order. `null` reads as empty.
    #[serde(rename = "tailles", default, deserialize_with = "null_as_empty")]
    pub sizes: IndexMap<String, bool>,
}

impl CatalogRecord {
    /// A record carrying only its model code; every other field is absent.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            description: None,
            color: None,
            gender: None,
            category: None,
            purchase_usd: None,
            purchase_ils: None,
            wholesale_price: None,
            club_price: None,
            retail_price: None,
            wholesale_margin_ils: None,
            wholesale_margin_pct: None,
            club_margin_ils: None,
            club_margin_pct: None,
            retail_margin_ils: None,
            retail_margin_pct: None,
            sizes: IndexMap::new(),
        }
    }

    /// Sale price for a tier.
    pub fn price(&self, tier: Tier) -> Option<f64> {
        match tier {
            Tier::Wholesale => self.wholesale_price,
            Tier::Club => self.club_price,
            Tier::Retail => self.retail_price,
        }
    }

    /// Absolute margin (ILS) for a tier.
    pub fn margin_ils(&self, tier: Tier) -> Option<f64> {
        match tier {
            Tier::Wholesale => self.wholesale_margin_ils,
            Tier::Club => self.club_margin_ils,
            Tier::Retail => self.retail_margin_ils,
        }
    }

    /// Margin as a percentage of the tier's sale price.
    pub fn margin_pct(&self, tier: Tier) -> Option<f64> {
        match tier {
            Tier::Wholesale => self.wholesale_margin_pct,
            Tier::Club => self.club_margin_pct,
            Tier::Retail => self.retail_margin_pct,
        }
    }

    /// Sizes currently available, in catalog order.
    pub fn available_sizes(&self) -> impl Iterator<Item = &str> {
        self.sizes
            .iter()
            .filter(|(_, available)| **available)
            .map(|(label, _)| label.as_str())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, bool>>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// NormalizedRecord - CatalogRecord plus derived net/transport split
// ---------------------------------------------------------------------------

/// A catalog record with its purchase price split into net and transport parts.
///
/// The derived fields are `None` when the record has no ILS purchase price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(flatten)]
    pub record: CatalogRecord,
    #[serde(rename = "prix_net_ils")]
    pub net_ils: Option<f64>,
    #[serde(rename = "prix_net_usd")]
    pub net_usd: Option<f64>,
    pub transport_ils: Option<f64>,
    pub transport_usd: Option<f64>,
}

impl NormalizedRecord {
    pub fn model(&self) -> &str {
        &self.record.model
    }
}

// ---------------------------------------------------------------------------
// Tier - The three sale tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Wholesale,
    Club,
    Retail,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Wholesale, Tier::Club, Tier::Retail];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Wholesale => "Grossiste",
            Tier::Club => "Club",
            Tier::Retail => "Détail",
        }
    }
}
