//! Pagination
//!
//! Pages are 1-based: page `p` of size `n` is `records[(p-1)*n .. p*n]`.
//! A page past the end is empty, not an error.

/// Requested page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Create a request; page and size are clamped to at least 1
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// First page of the given size
    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Same size, different page
    pub fn with_page(self, page: usize) -> Self {
        Self::new(page, self.page_size)
    }

    /// 1-based page number
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first row of this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` rows (0 when empty)
    pub fn page_count(&self, total: usize) -> usize {
        total / self.page_size + usize::from(total % self.page_size != 0)
    }

    /// Slice `records` to this page, cloning the rows
    pub fn slice<T: Clone>(&self, records: &[&T]) -> Page<T> {
        let start = self.offset().min(records.len());
        let end = start.saturating_add(self.page_size).min(records.len());
        Page {
            items: records[start..end].iter().map(|r| (*r).clone()).collect(),
            total: records.len(),
            request: *self,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(wewin_core::config::DEFAULT_PAGE_SIZE)
    }
}

/// One page of filtered rows plus the filtered total
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    total: usize,
    request: PageRequest,
}

impl<T> Page<T> {
    /// Rows on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take the rows
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Rows on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if this page has no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Filtered row count across all pages
    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based page number
    pub fn page(&self) -> usize {
        self.request.page()
    }

    /// Rows per page
    pub fn page_size(&self) -> usize {
        self.request.page_size()
    }

    /// Pages needed for the filtered total
    pub fn page_count(&self) -> usize {
        self.request.page_count(self.total)
    }

    /// 1-based inclusive row range shown, `None` for an empty page
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            let first = self.request.offset() + 1;
            Some((first, first + self.items.len() - 1))
        }
    }

    /// Footer text, e.g. "1-10 of 27 items"
    pub fn summary(&self) -> String {
        match self.range() {
            Some((first, last)) => format!("{}-{} of {} items", first, last, self.total),
            None => format!("0 of {} items", self.total),
        }
    }
}
