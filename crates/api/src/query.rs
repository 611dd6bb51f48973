//! Query parameter types for API handlers.

use demandboard_core::demand::{Category, DemandFilter, Priority};
use demandboard_core::paging::Page;
use serde::Deserialize;

/// Query parameters for `GET /api/demands`.
///
/// Filters are exact-match and combined with AND. `limit` / `offset` are
/// clamped by [`Page::new`].
#[derive(Debug, Default, Deserialize)]
pub struct DemandListParams {
    pub priority: Option<Priority>,
    pub subgroup: Option<String>,
    pub category: Option<Category>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl DemandListParams {
    pub fn filter(&self) -> DemandFilter {
        DemandFilter {
            priority: self.priority,
            subgroup: self.subgroup.clone(),
            category: self.category,
        }
    }

    pub fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}
