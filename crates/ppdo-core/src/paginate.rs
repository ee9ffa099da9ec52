//! 1-based pagination over an already filtered and sorted sequence.

use std::ops::Range;

use crate::error::{CoreError, CoreResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn new(page_size: usize) -> CoreResult<Self> {
        if page_size == 0 {
            return Err(CoreError::InvalidPageSize);
        }
        Ok(Self { page: 1, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to `page`; 0 is read as 1. Pages past the end are allowed and
    /// render empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> CoreResult<()> {
        if page_size == 0 {
            return Err(CoreError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}

/// `ceil(len / page_size)`, never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Index range of `page` within a sequence of `len` items, clamped to `len`.
pub fn page_bounds(len: usize, state: &PageState) -> Range<usize> {
    let start = (state.page - 1).saturating_mul(state.page_size).min(len);
    let end = start.saturating_add(state.page_size).min(len);
    start..end
}

pub fn paginate<'s, T>(items: &'s [T], state: &PageState) -> &'s [T] {
    &items[page_bounds(items.len(), state)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: usize, size: usize) -> PageState {
        let mut s = PageState::new(size).unwrap();
        s.set_page(page);
        s
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(paginate(&items, &state(3, 10)), &[20, 21, 22]);
        assert_eq!(paginate(&items, &state(1, 10)).len(), 10);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<usize> = (0..23).collect();
        assert!(paginate(&items, &state(4, 10)).is_empty());
        assert!(paginate(&items, &state(usize::MAX, 10)).is_empty());
    }

    #[test]
    fn test_page_zero_reads_as_one() {
        let s = state(0, 5);
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut s = state(3, 10);
        s.set_page_size(25).unwrap();
        assert_eq!(s.page(), 1);
        assert_eq!(s.page_size(), 25);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(PageState::new(0), Err(CoreError::InvalidPageSize));
        let mut s = state(2, 10);
        assert_eq!(s.set_page_size(0), Err(CoreError::InvalidPageSize));
        assert_eq!(s.page(), 2);
    }
}
