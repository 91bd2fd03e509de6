//! Fixed-size paging over the cached lists.

use std::num::NonZeroUsize;

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of rows borrowed from a cached list.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl<T> Page<'_, T> {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }
}

/// Slice `items` into the requested 1-based page. Page `0` is treated as the
/// first page; pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let page = page.max(1);
    let size = page_size.get();
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());

    Page {
        items: &items[start..end],
        page,
        page_size: size,
        total: items.len(),
    }
}
