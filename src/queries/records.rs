//! Record lookups, filtered views and pages.

use std::rc::Rc;

use crate::filter;
use crate::models::{FilterOptions, NormalizedRecord, PageView, QueryState};
use crate::pagination;
use crate::Catalogue;

// ---------------------------------------------------------------------------
// RecordQuery
// ---------------------------------------------------------------------------

/// Query interface over the catalogue's normalized records.
pub struct RecordQuery<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> RecordQuery<'a> {
    /// Create a new `RecordQuery` bound to the given catalogue.
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// Every record, in catalog order.
    pub fn all(&self) -> &'a [NormalizedRecord] {
        &self.catalogue.records
    }

    pub fn len(&self) -> usize {
        self.catalogue.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogue.records.is_empty()
    }

    /// Look up a record by its model code.
    pub fn get_by_model(&self, model: &str) -> Option<&'a NormalizedRecord> {
        self.catalogue.records.iter().find(|r| r.record.model == model)
    }

    // -- Filtered views ----------------------------------------------------

    /// The records selected by `state`, sorted as requested.
    ///
    /// The last view is memoized on search, filters and sort, so paging
    /// through one view filters the catalog only once.
    pub fn filtered(&self, state: &QueryState) -> Rc<[NormalizedRecord]> {
        let mut cache = self.catalogue.view_cache.borrow_mut();

        if let Some((ref key, ref view)) = *cache {
            if key.same_view(state) {
                tracing::debug!(search = %state.search, sort = %state.sort, "filtered view reused");
                return Rc::clone(view);
            }
        }

        let view: Rc<[NormalizedRecord]> = filter::query(&self.catalogue.records, state).into();
        tracing::debug!(
            search = %state.search,
            gender = ?state.gender,
            category = ?state.category,
            sort = %state.sort,
            matched = view.len(),
            "filtered view recomputed"
        );
        *cache = Some((state.with_page(1), Rc::clone(&view)));
        view
    }

    /// One page of the view selected by `state`.
    ///
    /// The requested page is clamped into range; the served page number is
    /// reported in the result.
    pub fn page(&self, state: &QueryState) -> PageView<NormalizedRecord> {
        let view = self.filtered(state);
        let page_size = self.catalogue.page_size;
        let page_count = pagination::page_count(view.len(), page_size);
        let page = pagination::clamp_page(state.page, page_count);

        PageView {
            items: pagination::paginate(&view[..], page, page_size).to_vec(),
            page,
            page_count,
            total: view.len(),
        }
    }

    /// Values for the gender and category selectors.
    pub fn filter_options(&self) -> FilterOptions {
        filter::filter_options(&self.catalogue.records)
    }
}
