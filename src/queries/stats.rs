//! Catalog-wide statistics and breakdowns.

use crate::models::{AggregateStats, GroupSummary, TierSummary};
use crate::stats;
use crate::Catalogue;

/// Query interface for aggregate figures over the whole catalogue.
///
/// Results never depend on the active filters.
pub struct StatsQuery<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> StatsQuery<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// The averages computed when the catalogue was built.
    pub fn summary(&self) -> &'a AggregateStats {
        &self.catalogue.stats
    }

    /// Record counts per gender, most common first.
    pub fn by_gender(&self) -> Vec<GroupSummary> {
        stats::gender_breakdown(&self.catalogue.records)
    }

    /// Top sub-categories by record count, with mean wholesale margin.
    pub fn top_categories(&self) -> Vec<GroupSummary> {
        stats::category_breakdown(&self.catalogue.records)
    }

    /// Average cost breakdown per sale tier.
    pub fn tiers(&self) -> Vec<TierSummary> {
        stats::tier_summaries(&self.catalogue.stats, &self.catalogue.pricing)
    }
}
