//! Query filters for list endpoints and the pagination metadata derived
//! from them.

use serde::Serialize;
use utoipa::ToSchema;

use crate::validator::{Validator, permitted_value};

/// Largest page number a client may request.
pub const MAX_PAGE: i64 = 10_000_000;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination and sort parameters for a list query.
///
/// `sort` is the raw client value, optionally prefixed with `-` for
/// descending order. It is only ever interpolated into SQL after being
/// matched against `sort_safelist`.
#[derive(Debug, Clone)]
pub struct Filters {
    /// 1-indexed page number.
    pub page: i64,
    /// Rows per page.
    pub page_size: i64,
    /// Requested sort field, e.g. `"year"` or `"-year"`.
    pub sort: String,
    /// Every sort value the caller accepts, including `-` variants.
    pub sort_safelist: &'static [&'static str],
}

impl Filters {
    /// Returns the column to sort by, or `None` if the requested sort value
    /// is not in the safelist.
    #[must_use]
    pub fn sort_column(&self) -> Option<&'static str> {
        self.sort_safelist
            .iter()
            .find(|safe| **safe == self.sort)
            .map(|safe| safe.trim_start_matches('-'))
    }

    /// Returns `"DESC"` when the sort value carries the `-` marker, else
    /// `"ASC"`.
    #[must_use]
    pub fn sort_direction(&self) -> &'static str {
        if self.sort.starts_with('-') {
            "DESC"
        } else {
            "ASC"
        }
    }

    /// Maximum number of rows to return.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.page_size
    }

    /// Number of rows to skip before the current page. Saturates instead of
    /// overflowing on unvalidated input.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Records errors for out-of-range pagination values or an unknown sort
/// field.
pub fn validate_filters(v: &mut Validator, filters: &Filters) {
    v.check(filters.page > 0, "page", "must be greater than zero");
    v.check(
        filters.page <= MAX_PAGE,
        "page",
        "must be a maximum of 10 million",
    );
    v.check(filters.page_size > 0, "page_size", "must be greater than zero");
    v.check(
        filters.page_size <= MAX_PAGE_SIZE,
        "page_size",
        "must be a maximum of 100",
    );
    v.check(
        permitted_value(&filters.sort.as_str(), filters.sort_safelist),
        "sort",
        "invalid sort value",
    );
}

/// Pagination summary returned alongside a page of results.
///
/// Every field is omitted from JSON when zero, so an empty result set
/// serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Metadata {
    /// Page that was returned.
    #[serde(skip_serializing_if = "is_zero")]
    pub current_page: i64,
    /// Rows per page.
    #[serde(skip_serializing_if = "is_zero")]
    pub page_size: i64,
    /// Always 1 for a non-empty result.
    #[serde(skip_serializing_if = "is_zero")]
    pub first_page: i64,
    /// Last page holding any rows.
    #[serde(skip_serializing_if = "is_zero")]
    pub last_page: i64,
    /// Rows matching the query across all pages.
    #[serde(skip_serializing_if = "is_zero")]
    pub total_records: i64,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// Builds [`Metadata`] from the total matching row count.
///
/// Returns the zero value when `total_records` is 0.
#[must_use]
pub fn calculate_metadata(total_records: i64, page: i64, page_size: i64) -> Metadata {
    if total_records == 0 {
        return Metadata::default();
    }
    let page_size_divisor = page_size.max(1);
    Metadata {
        current_page: page,
        page_size,
        first_page: 1,
        last_page: (total_records + page_size_divisor - 1) / page_size_divisor,
        total_records,
    }
}
