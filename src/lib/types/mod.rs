//! Field types for the site configuration.
//! Implemented as newtypes to enforce invariants.

use std::{fmt, path::Path, str::FromStr};

use chrono_tz::Tz;
use url::Url;

use crate::error::{ConfigError, Result};

/// Language used when `lang` is left empty.
pub const DEFAULT_LANG: &str = "en";

/// Absolute http(s) URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SiteUrl(Url);

impl SiteUrl {
    /// `field` names the configuration key in the error.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self> {
        let url_err = |reason: String| ConfigError::Url {
            field,
            value: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw.trim()).map_err(|e| url_err(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(url_err(format!("unsupported scheme `{}`", url.scheme())));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(url_err("missing host".to_string()));
        }
        Ok(Self(url))
    }

    /// Like [`SiteUrl::parse`], for URLs that other paths are resolved
    /// against. A query or fragment would end up in the middle of every
    /// derived link, so both are rejected.
    pub fn parse_base(field: &'static str, raw: &str) -> Result<Self> {
        let url = Self::parse(field, raw)?;
        let stray = if url.0.query().is_some() {
            Some("query")
        } else if url.0.fragment().is_some() {
            Some("fragment")
        } else {
            None
        };
        match stray {
            Some(part) => Err(ConfigError::Url {
                field,
                value: raw.to_string(),
                reason: format!("a base URL cannot carry a {part}"),
            }),
            None => Ok(url),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolve `path` against this URL, treated as a directory.
    ///
    /// A single leading `/` stays under the base path. Absolute and
    /// protocol-relative references replace the base as usual.
    pub fn join(&self, path: &str) -> Result<String> {
        let mut base = self.0.clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }

        let reference = match path.strip_prefix('/') {
            Some(rest) if !rest.starts_with('/') => rest,
            _ => path,
        };
        base.join(reference)
            .map(String::from)
            .map_err(|e| ConfigError::Join {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language tag, checked against the syntactic subset of BCP-47 that sites
/// use in `<html lang>`: a 2–8 letter primary subtag or an `x-`/`i-` prefix,
/// then 1–8 character alphanumeric subtags. A single-character subtag must be
/// followed by another subtag. An empty input resolves to [`DEFAULT_LANG`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LangTag(String);

impl LangTag {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self(DEFAULT_LANG.to_string()));
        }

        let subtags: Vec<&str> = raw.split('-').collect();
        let primary = subtags[0];
        let prefix_only = matches!(primary, "x" | "X" | "i" | "I");
        let primary_ok = prefix_only
            || ((2..=8).contains(&primary.len())
                && primary.chars().all(|c| c.is_ascii_alphabetic()));
        let rest_ok = subtags[1..].iter().all(|s| {
            (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric())
        });
        let singletons_ok = subtags
            .iter()
            .enumerate()
            .all(|(i, s)| s.len() != 1 || i + 1 < subtags.len());

        if primary_ok && rest_ok && singletons_ok {
            Ok(Self(raw.to_string()))
        } else {
            Err(ConfigError::Lang(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LangTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// IANA timezone identifier, resolved against the tz database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeZoneName(Tz);

impl TimeZoneName {
    pub fn parse(raw: &str) -> Result<Self> {
        Tz::from_str(raw.trim())
            .map(Self)
            .map_err(|_| ConfigError::Timezone(raw.to_string()))
    }

    pub fn tz(&self) -> Tz {
        self.0
    }

    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }
}

impl fmt::Display for TimeZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text direction written into `<html dir>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDir {
    #[default]
    Ltr,
    Rtl,
    Auto,
}

impl TextDir {
    pub const ALL: [TextDir; 3] = [TextDir::Ltr, TextDir::Rtl, TextDir::Auto];

    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim() {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            "auto" => Ok(Self::Auto),
            other => Err(ConfigError::Enum {
                field: "dir",
                value: other.to_string(),
                expected: r#""ltr", "rtl", "auto""#,
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for TextDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site-relative path to the default social preview image.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OgImagePath(String);

impl OgImagePath {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let absolute = raw.starts_with('/') || raw.contains("://") || Path::new(raw).is_absolute();
        if raw.is_empty() || absolute {
            return Err(ConfigError::OgImage(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OgImagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
