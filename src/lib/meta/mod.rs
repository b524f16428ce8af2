//! Page metadata derived from the site configuration: `<html>` attributes,
//! canonical and social preview URLs, and the "edit this page" link.

use crate::{config::SiteConfig, error::Result, utils::escape_attr};

/// Where a page's social preview image should come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OgSource<'a> {
    /// Any non-post page, optionally bringing its own image.
    Page { image: Option<&'a str> },
    /// A post detail page. `path` is the post's site-relative path.
    Post {
        path: &'a str,
        image: Option<&'a str>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditLink {
    pub text: String,
    pub href: String,
}

impl SiteConfig {
    /// `lang="…" dir="…"` for the root `<html>` element.
    pub fn html_attributes(&self) -> String {
        format!(
            r#"lang="{}" dir="{}""#,
            escape_attr(self.lang.as_str()),
            self.dir.as_str()
        )
    }

    pub fn canonical_url(&self, path: &str) -> Result<String> {
        self.website.join(path)
    }

    /// Absolute URL of the preview image for a page.
    ///
    /// An image supplied by the page wins. Posts without one fall back to the
    /// generated `<path>/index.png` when `dynamicOgImage` is on. Everything
    /// else uses the site-wide `ogImage`. Absolute and protocol-relative
    /// images pass through unchanged.
    pub fn og_image_url(&self, source: OgSource<'_>) -> Result<String> {
        let chosen = match source {
            OgSource::Page { image: Some(img) } | OgSource::Post { image: Some(img), .. } => {
                img.to_string()
            }
            OgSource::Post { path, image: None } if self.dynamic_og_image => {
                format!("{}/index.png", path.trim_end_matches('/'))
            }
            _ => self.og_image.as_str().to_string(),
        };
        self.website.join(&chosen)
    }

    /// Link to the post's source, or `None` when editing is disabled
    /// site-wide or hidden by the post.
    pub fn edit_link(&self, source_path: &str, hidden: bool) -> Option<EditLink> {
        if !self.edit_post.enabled || hidden {
            return None;
        }
        Some(EditLink {
            text: self.edit_post.text.clone(),
            href: format!("{}{source_path}", self.edit_post.url),
        })
    }
}
