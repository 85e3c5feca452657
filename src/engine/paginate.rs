use crate::feed::types::Project;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based.
    pub page_number: usize,
    pub page_size: usize,
}

impl PageState {
    /// A zero page size is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_number: 1,
            page_size: page_size.max(1),
        }
    }
}

/// Number of pages needed for `len` items. Never less than 1, so an empty
/// feed still reads as "page 1 of 1".
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of page `page` over `len` items, clipped to what exists.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// One page of the filtered feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<Project>,
    pub page_number: usize,
    pub total_pages: usize,
    /// Size of the whole filtered list, not just this page.
    pub total_items: usize,
}

impl PageView {
    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Page numbers to offer as direct jumps.
    pub fn page_numbers(&self) -> Range<usize> {
        1..self.total_pages + 1
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} project(s) | Page {} of {}",
            self.total_items, self.page_number, self.total_pages
        )
    }
}
