// SPDX-License-Identifier: MPL-2.0
//! Asset resolution port definition.
//!
//! This module defines the [`AssetResolver`] trait that maps the asset names
//! carried by a [`Page`] to whatever the host renders (a texture handle, a
//! decoded bitmap, a file path...).

use crate::domain::{Page, PageList};
use std::collections::HashMap;

/// Maps asset names to renderable images.
pub trait AssetResolver {
    /// Renderable representation of an image.
    type Image;

    /// Resolves an asset by name. Returns `None` when no such asset exists.
    fn resolve(&self, name: &str) -> Option<Self::Image>;

    /// Resolves the full-size image of a page.
    fn resolve_image(&self, page: &Page) -> Option<Self::Image> {
        self.resolve(page.image_name())
    }

    /// Resolves the drawer thumbnail of a page.
    fn resolve_thumbnail(&self, page: &Page) -> Option<Self::Image> {
        self.resolve(&page.thumbnail_name())
    }
}

/// Any map from names to images is a resolver.
impl<I: Clone, S: std::hash::BuildHasher> AssetResolver for HashMap<String, I, S> {
    type Image = I;

    fn resolve(&self, name: &str) -> Option<I> {
        self.get(name).cloned()
    }
}

/// A page paired with the result of resolving one of its assets.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage<'a, I> {
    pub page: &'a Page,
    pub image: Option<I>,
}

/// Resolves the thumbnails of every page, in display order.
pub fn resolve_thumbnails<'a, R: AssetResolver>(
    pages: &'a PageList,
    resolver: &R,
) -> Vec<ResolvedPage<'a, R::Image>> {
    pages
        .iter()
        .map(|page| ResolvedPage {
            page,
            image: resolver.resolve_thumbnail(page),
        })
        .collect()
}
