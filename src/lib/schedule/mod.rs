//! Scheduled publication and timezone-aware post dates.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{config::SiteConfig, types::TimeZoneName};

/// Anything with a publish time that may be held back.
pub trait Scheduled {
    fn publish_at(&self) -> DateTime<Utc>;

    fn is_draft(&self) -> bool {
        false
    }
}

/// Decides which posts are visible at a given instant.
#[derive(Clone, Copy, Debug)]
pub struct PostFilter<'a> {
    site: &'a SiteConfig,
    now: DateTime<Utc>,
    preview: bool,
}

impl PostFilter<'_> {
    /// Show future-dated posts too. Drafts stay hidden.
    pub fn preview(mut self, on: bool) -> Self {
        self.preview = on;
        self
    }

    pub fn is_visible<P: Scheduled>(&self, post: &P) -> bool {
        !post.is_draft() && (self.preview || self.site.is_published(post.publish_at(), self.now))
    }

    pub fn apply<'p, P: Scheduled>(&self, posts: &'p [P]) -> Vec<&'p P> {
        posts.iter().filter(|p| self.is_visible(*p)).collect()
    }
}

impl SiteConfig {
    /// A post is published once `now` reaches its publish time minus the
    /// scheduled post margin.
    pub fn is_published(&self, publish_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        publish_at
            .checked_sub_signed(self.scheduled_post_margin)
            .is_none_or(|opens_at| now >= opens_at)
    }

    pub fn post_filter(&self, now: DateTime<Utc>) -> PostFilter<'_> {
        PostFilter {
            site: self,
            now,
            preview: false,
        }
    }

    /// `instant` in the post's own zone if given, else the site zone.
    pub fn local_datetime(
        &self,
        instant: DateTime<Utc>,
        zone: Option<TimeZoneName>,
    ) -> DateTime<Tz> {
        instant.with_timezone(&zone.unwrap_or(self.timezone).tz())
    }

    /// e.g. `5 Mar, 2024`
    pub fn display_date(&self, instant: DateTime<Utc>, zone: Option<TimeZoneName>) -> String {
        self.local_datetime(instant, zone)
            .format("%-d %b, %Y")
            .to_string()
    }

    /// RFC 3339 timestamp for a `<time datetime>` attribute.
    pub fn datetime_attr(&self, instant: DateTime<Utc>, zone: Option<TimeZoneName>) -> String {
        self.local_datetime(instant, zone).to_rfc3339()
    }
}

#[cfg(test)]
mod tests;
