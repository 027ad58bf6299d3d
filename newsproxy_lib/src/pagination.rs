//! Page arithmetic for the browsing client.

use std::fmt;

/// Navigation state derived from a result count. Never stored; recompute it
/// from the session whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl PaginationState {
    /// A zero page size is treated as 1.
    pub fn new(current_page: u32, page_size: u32, total_count: u64) -> Self {
        Self {
            current_page,
            page_size: page_size.max(1),
            total_count,
        }
    }

    /// `ceil(total_count / page_size)`; 0 when there are no results.
    pub fn last_page(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.page_size))
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        u64::from(self.current_page) < self.last_page()
    }

    /// `"{current} of {last}"`, as shown between the buttons.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current_page, self.last_page())
    }
}
