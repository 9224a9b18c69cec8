//! Generic table state for list views.
//!
//! List pages share one sort-and-paginate component instead of
//! re-implementing comparison logic per page: a column key type implements
//! [`SortKey`] for its row type, and [`TableState`] applies the selected
//! sort and page window in one pass.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// A sortable column key for rows of type `T`.
///
/// Implemented by per-page column enums; the comparison logic lives with the
/// column definition, not with the table machinery.
pub trait SortKey<T> {
    /// Compares two rows under this column, in ascending terms.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Calculates the offset of the first item on this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Returns the maximum number of items on this page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

/// Sort selection plus page window for one list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableState<K> {
    /// The column to sort by, if any. `None` keeps caller order.
    pub sort: Option<K>,
    /// Sort direction (ignored when `sort` is `None`).
    #[serde(default)]
    pub direction: SortDirection,
    /// Page window.
    #[serde(default)]
    pub page: PageRequest,
}

impl<K> Default for TableState<K> {
    fn default() -> Self {
        Self {
            sort: None,
            direction: SortDirection::default(),
            page: PageRequest::default(),
        }
    }
}

impl<K> TableState<K> {
    /// Sorts and pages a full result set.
    ///
    /// The sort is stable, so rows comparing equal under the selected column
    /// keep their incoming relative order.
    #[must_use]
    pub fn apply<T>(&self, mut rows: Vec<T>) -> PageResponse<T>
    where
        K: SortKey<T>,
    {
        if let Some(key) = &self.sort {
            rows.sort_by(|a, b| {
                let ordering = key.compare(a, b);
                match self.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let total = rows.len() as u64;
        let data: Vec<T> = rows
            .into_iter()
            .skip(usize::try_from(self.page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(self.page.limit()).unwrap_or(usize::MAX))
            .collect();

        PageResponse::new(data, self.page.page, self.page.per_page, total)
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if total == 0 || per_page == 0 {
            1
        } else {
            u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
        };

        Self {
            data,
            meta: PageMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }
}
