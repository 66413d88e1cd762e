// SPDX-License-Identifier: MPL-2.0
//! Page catalog types.
//!
//! A [`PageList`] is the fixed, ordered set of images a screen can display.
//! It is established once at startup and never mutated afterwards.

use crate::config::{DEFAULT_PAGES, THUMBNAIL_PREFIX};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroU32;

/// Positive page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(NonZeroU32);

impl PageId {
    /// Returns `None` for zero.
    #[must_use]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for PageId {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        Self::new(raw).ok_or(Error::InvalidPageId(raw))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One displayable image of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    image_name: String,
    thumbnail_prefix: String,
}

impl Page {
    /// Creates a page whose thumbnail uses the default `thumb-` prefix.
    pub fn new(id: PageId, image_name: impl Into<String>) -> Self {
        Self::with_thumbnail_prefix(id, image_name, THUMBNAIL_PREFIX)
    }

    pub fn with_thumbnail_prefix(
        id: PageId,
        image_name: impl Into<String>,
        thumbnail_prefix: impl Into<String>,
    ) -> Self {
        Self {
            id,
            image_name: image_name.into(),
            thumbnail_prefix: thumbnail_prefix.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Asset name of the full-size image.
    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Asset name of the drawer thumbnail: the prefix followed by the image name.
    #[must_use]
    pub fn thumbnail_name(&self) -> String {
        format!("{}{}", self.thumbnail_prefix, self.image_name)
    }
}

/// Fixed, ordered, non-empty list of pages with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList {
    pages: Vec<Page>,
}

impl PageList {
    /// Builds the list, rejecting an empty input or duplicated ids.
    pub fn new(pages: Vec<Page>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyPageList);
        }

        let mut seen = HashSet::with_capacity(pages.len());
        for page in &pages {
            if !seen.insert(page.id()) {
                return Err(Error::DuplicatePageId(page.id()));
            }
        }

        Ok(Self { pages })
    }

    /// Builds a list from raw `(id, image name)` pairs.
    pub fn from_entries<'a, I>(entries: I, thumbnail_prefix: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, &'a str)>,
    {
        let pages = entries
            .into_iter()
            .map(|(raw, name)| {
                PageId::try_from(raw)
                    .map(|id| Page::with_thumbnail_prefix(id, name, thumbnail_prefix))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(pages)
    }

    /// Returns the first page. Always present.
    #[must_use]
    pub fn first(&self) -> &Page {
        &self.pages[0]
    }

    /// Looks a page up by id.
    #[must_use]
    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: PageId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for PageList {
    /// The built-in two-page magazine catalog.
    fn default() -> Self {
        let pages = DEFAULT_PAGES
            .iter()
            .filter_map(|&(raw, name)| PageId::new(raw).map(|id| Page::new(id, name)))
            .collect();
        Self { pages }
    }
}

impl<'a> IntoIterator for &'a PageList {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> PageId {
        PageId::new(raw).expect("non-zero page id")
    }

    #[test]
    fn page_id_rejects_zero() {
        assert!(PageId::new(0).is_none());
        assert_eq!(PageId::try_from(0), Err(Error::InvalidPageId(0)));
        assert_eq!(PageId::try_from(3).map(PageId::get), Ok(3));
    }

    #[test]
    fn thumbnail_name_prefixes_image_name() {
        let page = Page::new(id(1), "magazine-front-cover");
        assert_eq!(page.thumbnail_name(), "thumb-magazine-front-cover");

        let custom = Page::with_thumbnail_prefix(id(1), "cover", "small_");
        assert_eq!(custom.thumbnail_name(), "small_cover");
    }

    #[test]
    fn empty_page_list_is_rejected() {
        assert_eq!(PageList::new(Vec::new()), Err(Error::EmptyPageList));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = PageList::new(vec![Page::new(id(1), "a"), Page::new(id(1), "b")]);
        assert_eq!(result, Err(Error::DuplicatePageId(id(1))));
    }

    #[test]
    fn list_preserves_order_and_finds_pages() {
        let list = PageList::new(vec![
            Page::new(id(4), "d"),
            Page::new(id(2), "b"),
            Page::new(id(9), "z"),
        ])
        .expect("valid list");

        let names: Vec<_> = list.iter().map(Page::image_name).collect();
        assert_eq!(names, vec!["d", "b", "z"]);
        assert_eq!(list.first().id(), id(4));
        assert_eq!(list.get(id(2)).map(Page::image_name), Some("b"));
        assert!(!list.contains(id(3)));
    }

    #[test]
    fn from_entries_rejects_zero_id() {
        let result = PageList::from_entries([(1, "a"), (0, "b")], THUMBNAIL_PREFIX);
        assert_eq!(result, Err(Error::InvalidPageId(0)));
    }

    #[test]
    fn default_catalog_has_both_magazine_covers() {
        let list = PageList::default();
        assert_eq!(list.len(), 2);
        assert_eq!(list.first().image_name(), "magazine-front-cover");
        assert_eq!(
            list.get(id(2)).map(Page::thumbnail_name).as_deref(),
            Some("thumb-magazine-back-cover")
        );
    }
}
