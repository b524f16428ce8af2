//! The site configuration record and its process-wide instance.
//!
//! A [`SiteConfig`] is parsed from TOML or JSON into a loosely typed
//! [`RawSiteConfig`] first, then checked field by field so that every
//! failure maps onto a specific [`ConfigError`] variant.

use std::{fs, path::Path, sync::OnceLock};

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    error::{ConfigError, Result},
    types::{LangTag, OgImagePath, SiteUrl, TextDir, TimeZoneName},
};

/// The site this crate ships with.
pub const BUILTIN_SITE: &str = include_str!("site.toml");

/// "Edit this page" link settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditPost {
    pub enabled: bool,
    pub text: String,
    /// Prefix the post's source path is appended to. Only checked when enabled.
    pub url: String,
}

/// Validated site configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSiteConfig", into = "RawSiteConfig")]
pub struct SiteConfig {
    pub website: SiteUrl,
    pub author: String,
    pub profile: SiteUrl,
    pub desc: String,
    pub title: String,
    pub og_image: OgImagePath,
    pub light_and_dark_mode: bool,
    pub post_per_index: usize,
    pub post_per_page: usize,
    pub scheduled_post_margin: TimeDelta,
    pub show_archives: bool,
    pub show_back_button: bool,
    pub edit_post: EditPost,
    pub dynamic_og_image: bool,
    pub dir: TextDir,
    pub lang: LangTag,
    pub timezone: TimeZoneName,
}

/// On-disk shape. Every key is required.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawSiteConfig {
    pub website: String,
    pub author: String,
    pub profile: String,
    pub desc: String,
    pub title: String,
    pub og_image: String,
    pub light_and_dark_mode: bool,
    pub post_per_index: i64,
    pub post_per_page: i64,
    pub scheduled_post_margin: i64,
    pub show_archives: bool,
    pub show_back_button: bool,
    pub edit_post: EditPost,
    pub dynamic_og_image: bool,
    pub dir: String,
    pub lang: String,
    pub timezone: String,
}

fn non_negative(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| ConfigError::Range { field, value })
}

impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSiteConfig) -> Result<Self> {
        let post_per_index = non_negative("postPerIndex", raw.post_per_index)?;
        let post_per_page = non_negative("postPerPage", raw.post_per_page)?;
        if post_per_page == 0 {
            warn!("postPerPage is 0, listings collapse into a single page");
        }

        let margin_range = ConfigError::Range {
            field: "scheduledPostMargin",
            value: raw.scheduled_post_margin,
        };
        if raw.scheduled_post_margin < 0 {
            return Err(margin_range);
        }
        let scheduled_post_margin =
            TimeDelta::try_milliseconds(raw.scheduled_post_margin).ok_or(margin_range)?;

        if raw.edit_post.enabled {
            SiteUrl::parse_base("editPost.url", &raw.edit_post.url)?;
        } else {
            debug!("editPost disabled, url left unchecked");
        }

        Ok(Self {
            website: SiteUrl::parse_base("website", &raw.website)?,
            author: raw.author,
            profile: SiteUrl::parse("profile", &raw.profile)?,
            desc: raw.desc,
            title: raw.title,
            og_image: OgImagePath::parse(&raw.og_image)?,
            light_and_dark_mode: raw.light_and_dark_mode,
            post_per_index,
            post_per_page,
            scheduled_post_margin,
            show_archives: raw.show_archives,
            show_back_button: raw.show_back_button,
            edit_post: raw.edit_post,
            dynamic_og_image: raw.dynamic_og_image,
            dir: TextDir::parse(&raw.dir)?,
            lang: LangTag::parse(&raw.lang)?,
            timezone: TimeZoneName::parse(&raw.timezone)?,
        })
    }
}

impl From<SiteConfig> for RawSiteConfig {
    fn from(c: SiteConfig) -> Self {
        Self {
            website: c.website.as_str().to_string(),
            author: c.author,
            profile: c.profile.as_str().to_string(),
            desc: c.desc,
            title: c.title,
            og_image: c.og_image.as_str().to_string(),
            light_and_dark_mode: c.light_and_dark_mode,
            post_per_index: c.post_per_index as i64,
            post_per_page: c.post_per_page as i64,
            scheduled_post_margin: c.scheduled_post_margin.num_milliseconds(),
            show_archives: c.show_archives,
            show_back_button: c.show_back_button,
            edit_post: c.edit_post,
            dynamic_og_image: c.dynamic_og_image,
            dir: c.dir.as_str().to_string(),
            lang: c.lang.as_str().to_string(),
            timezone: c.timezone.as_str().to_string(),
        }
    }
}

impl SiteConfig {
    /// The record in [`BUILTIN_SITE`].
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_SITE).expect("built-in site configuration is valid")
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let raw: RawSiteConfig = toml::from_str(s)?;
        Self::try_from(raw)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: RawSiteConfig = serde_json::from_str(s)?;
        Self::try_from(raw)
    }

    /// Load from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading site configuration");

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match ext.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }
}

/// Write-once holder for a [`SiteConfig`].
#[derive(Debug, Default)]
pub struct SiteCell(OnceLock<SiteConfig>);

impl SiteCell {
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Fails if the cell already holds a value, including the built-in
    /// fallback handed out by an earlier [`SiteCell::get`].
    pub fn install(&self, config: SiteConfig) -> Result<&SiteConfig> {
        self.0
            .set(config)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        let installed = self.get();
        info!(
            title = %installed.title,
            website = %installed.website,
            "site configuration installed"
        );
        Ok(installed)
    }

    pub fn get(&self) -> &SiteConfig {
        self.0.get_or_init(|| {
            debug!("no site configuration installed, using the built-in record");
            SiteConfig::builtin()
        })
    }
}

static SITE: SiteCell = SiteCell::new();

/// Install the process-wide configuration. Call before the first [`site`].
pub fn install(config: SiteConfig) -> Result<&'static SiteConfig> {
    SITE.install(config)
}

/// The process-wide configuration.
pub fn site() -> &'static SiteConfig {
    SITE.get()
}
