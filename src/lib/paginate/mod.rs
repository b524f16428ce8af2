//! Listing boundaries from `postPerIndex` and `postPerPage`.
//!
//! Page numbers are 1-based. A listing always has at least one page, so an
//! empty collection still yields an empty page 1. A `postPerPage` of 0 puts
//! every post on that single page.

use std::ops::RangeInclusive;

use crate::config::SiteConfig;

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub number: usize,
    pub total_pages: usize,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn prev(&self) -> Option<usize> {
        (self.number > 1).then(|| self.number - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.number < self.total_pages).then(|| self.number + 1)
    }
}

impl SiteConfig {
    /// Posts shown on the landing page.
    pub fn landing<'a, T>(&self, posts: &'a [T]) -> &'a [T] {
        &posts[..posts.len().min(self.post_per_index)]
    }

    pub fn total_pages(&self, count: usize) -> usize {
        match self.post_per_page {
            0 => 1,
            per => count.div_ceil(per).max(1),
        }
    }

    pub fn page_numbers(&self, count: usize) -> RangeInclusive<usize> {
        1..=self.total_pages(count)
    }

    /// Page `number` of `posts`, or `None` past the last page.
    pub fn page<'a, T>(&self, posts: &'a [T], number: usize) -> Option<Page<'a, T>> {
        let total_pages = self.total_pages(posts.len());
        if number == 0 || number > total_pages {
            return None;
        }

        let items = match self.post_per_page {
            0 => posts,
            per => {
                let start = (number - 1) * per;
                let end = (start + per).min(posts.len());
                &posts[start..end]
            }
        };

        Some(Page {
            number,
            total_pages,
            items,
        })
    }

    pub fn paginate<'a, T>(&self, posts: &'a [T]) -> Vec<Page<'a, T>> {
        self.page_numbers(posts.len())
            .filter_map(|n| self.page(posts, n))
            .collect()
    }
}
