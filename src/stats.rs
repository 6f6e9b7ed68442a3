//! Catalog-wide averages, group breakdowns and per-tier summaries.

use indexmap::IndexMap;

use crate::config::{self, PricingConfig};
use crate::models::{AggregateStats, GroupSummary, NormalizedRecord, Tier, TierSummary};
use crate::normalize::{round1, round2};

/// Compute the catalog-wide statistics.
///
/// Each average is taken over the records that define that field, so a record
/// missing one price never skews the denominator of another.
pub fn compute_stats(records: &[NormalizedRecord]) -> AggregateStats {
    let avg_price =
        |f: fn(&NormalizedRecord) -> Option<f64>| mean(records.iter().filter_map(f)).map(round2);
    let avg_pct =
        |f: fn(&NormalizedRecord) -> Option<f64>| mean(records.iter().filter_map(f)).map(round1);

    AggregateStats {
        total_count: records.len(),
        avg_net_ils: avg_price(|r| r.net_ils),
        avg_transport_ils: avg_price(|r| r.transport_ils),
        avg_wholesale: avg_price(|r| r.record.wholesale_price),
        avg_club: avg_price(|r| r.record.club_price),
        avg_retail: avg_price(|r| r.record.retail_price),
        avg_margin_wholesale_pct: avg_pct(|r| r.record.wholesale_margin_pct),
        avg_margin_club_pct: avg_pct(|r| r.record.club_margin_pct),
        avg_margin_retail_pct: avg_pct(|r| r.record.retail_margin_pct),
    }
}

/// Group records by `key_fn`, most populated group first.
///
/// Groups with equal counts keep the order in which their key first appeared.
/// With `with_margin`, each summary carries the mean wholesale margin
/// percentage of its members (absent margins count as 0).
pub fn group_by<F>(
    records: &[NormalizedRecord],
    key_fn: F,
    with_margin: bool,
) -> Vec<GroupSummary>
where
    F: Fn(&NormalizedRecord) -> String,
{
    let mut groups: IndexMap<String, (usize, f64)> = IndexMap::new();
    for r in records {
        let entry = groups.entry(key_fn(r)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += r.record.wholesale_margin_pct.unwrap_or(0.0);
    }

    let mut summaries: Vec<GroupSummary> = groups
        .into_iter()
        .map(|(key, (count, margin_sum))| GroupSummary {
            key,
            count,
            avg_margin_pct: with_margin.then(|| round1(margin_sum / count as f64)),
        })
        .collect();

    // stable: ties stay in first-appearance order
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

/// Record counts per gender.
pub fn gender_breakdown(records: &[NormalizedRecord]) -> Vec<GroupSummary> {
    group_by(
        records,
        |r| key_or(r.record.gender.as_deref(), config::UNSPECIFIED_GENDER),
        false,
    )
}

/// The most populated sub-categories with their mean wholesale margin.
pub fn category_breakdown(records: &[NormalizedRecord]) -> Vec<GroupSummary> {
    let mut groups = group_by(
        records,
        |r| key_or(r.record.category.as_deref(), config::OTHER_CATEGORY),
        true,
    );
    groups.truncate(config::TOP_CATEGORY_LIMIT);
    groups
}

/// Average cost breakdown and sale figures for each tier.
pub fn tier_summaries(stats: &AggregateStats, pricing: &PricingConfig) -> Vec<TierSummary> {
    let net_ils = stats.avg_net_ils;
    let transport_ils = stats.avg_transport_ils;
    let net_usd = net_ils.map(|v| round2(v * pricing.usd_factor));
    let transport_usd = transport_ils.map(|v| round2(v * pricing.usd_factor));
    let total_ils = sum2(net_ils, transport_ils);
    let total_usd = sum2(
        net_ils.map(|v| v * pricing.usd_factor),
        transport_ils.map(|v| v * pricing.usd_factor),
    );

    Tier::ALL
        .iter()
        .map(|&tier| TierSummary {
            tier,
            net_ils,
            net_usd,
            transport_ils,
            transport_usd,
            total_ils,
            total_usd,
            avg_price: stats.avg_price(tier),
            avg_margin_pct: stats.avg_margin_pct(tier),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

fn sum2(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(round2(a + b)),
        _ => None,
    }
}

fn key_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
