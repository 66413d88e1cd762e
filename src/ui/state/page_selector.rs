// SPDX-License-Identifier: MPL-2.0
//! Active page tracking.
//!
//! Keeps the id of the page currently shown among a fixed [`PageList`].

use crate::domain::{Page, PageId, PageList};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PageSelector {
    pages: PageList,
    active: PageId,
}

impl PageSelector {
    /// Starts on the first page of the list.
    #[must_use]
    pub fn new(pages: PageList) -> Self {
        let active = pages.first().id();
        Self { pages, active }
    }

    /// Makes `id` the active page.
    ///
    /// Selecting an id outside the list is a caller error: the active page is
    /// left untouched and [`Error::PageNotFound`] is returned.
    pub fn select_page(&mut self, id: PageId) -> Result<&Page> {
        if !self.pages.contains(id) {
            tracing::warn!(page = %id, "rejected selection of unknown page");
            return Err(Error::PageNotFound(id));
        }
        self.active = id;
        self.current_page()
    }

    /// Returns the page whose id equals the active id.
    pub fn current_page(&self) -> Result<&Page> {
        self.pages
            .get(self.active)
            .ok_or(Error::PageNotFound(self.active))
    }

    #[must_use]
    pub fn active_id(&self) -> PageId {
        self.active
    }

    #[must_use]
    pub fn pages(&self) -> &PageList {
        &self.pages
    }
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::new(PageList::default())
    }
}
