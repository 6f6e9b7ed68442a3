//! Net/transport price derivation.
//!
//! Purchase prices carry an 8% transport surcharge. Each record's ILS purchase
//! price is split into its net and transport parts, both also expressed in USD.
//! All four figures are rounded to 2 decimals here; later totals recombine the
//! rounded parts.

use crate::config::PricingConfig;
use crate::models::{CatalogRecord, NormalizedRecord};

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Normalize every record with the default pricing constants.
pub fn normalize(records: &[CatalogRecord]) -> Vec<NormalizedRecord> {
    normalize_with(records, &PricingConfig::default())
}

/// Normalize every record with explicit pricing constants.
pub fn normalize_with(records: &[CatalogRecord], pricing: &PricingConfig) -> Vec<NormalizedRecord> {
    let normalized: Vec<NormalizedRecord> = records
        .iter()
        .map(|r| normalize_record(r, pricing))
        .collect();

    let unpriced = normalized.iter().filter(|r| r.net_ils.is_none()).count();
    if unpriced > 0 {
        tracing::warn!(
            unpriced,
            total = normalized.len(),
            "records without an ILS purchase price; net/transport left empty"
        );
    }

    normalized
}

/// Derive the net/transport split for a single record.
pub fn normalize_record(record: &CatalogRecord, pricing: &PricingConfig) -> NormalizedRecord {
    let split = record.purchase_ils.map(|purchase| {
        let net = purchase / pricing.net_divisor;
        let transport = purchase - net;
        (
            round2(net),
            round2(net * pricing.usd_factor),
            round2(transport),
            round2(transport * pricing.usd_factor),
        )
    });

    NormalizedRecord {
        record: record.clone(),
        net_ils: split.map(|s| s.0),
        net_usd: split.map(|s| s.1),
        transport_ils: split.map(|s| s.2),
        transport_usd: split.map(|s| s.3),
    }
}
