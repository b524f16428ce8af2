use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::Scheduled;
use crate::{config::SiteConfig, types::TimeZoneName};

struct Post {
    at: DateTime<Utc>,
    draft: bool,
}

impl Scheduled for Post {
    fn publish_at(&self) -> DateTime<Utc> {
        self.at
    }

    fn is_draft(&self) -> bool {
        self.draft
    }
}

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
}

#[test]
fn margin_opens_early() {
    let c = SiteConfig::builtin();
    let publish = noon();

    assert!(c.is_published(publish, publish));
    assert!(c.is_published(publish, publish - TimeDelta::minutes(15)));
    assert!(!c.is_published(
        publish,
        publish - TimeDelta::minutes(15) - TimeDelta::milliseconds(1)
    ));
    assert!(!c.is_published(publish, publish - TimeDelta::hours(1)));
}

#[test]
fn gating_matches_margin_arithmetic() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(
            &(0i64..3_600_000, -7_200_000i64..7_200_000),
            |(margin_ms, offset_ms)| {
                let mut c = SiteConfig::builtin();
                c.scheduled_post_margin = TimeDelta::milliseconds(margin_ms);
                let publish = noon();
                let now = publish + TimeDelta::milliseconds(offset_ms);
                prop_assert_eq!(c.is_published(publish, now), offset_ms >= -margin_ms);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn filter_hides_drafts_and_future_posts() {
    let c = SiteConfig::builtin();
    let now = noon();
    let posts = vec![
        Post {
            at: now - TimeDelta::days(1),
            draft: false,
        },
        Post {
            at: now + TimeDelta::minutes(10),
            draft: false,
        },
        Post {
            at: now + TimeDelta::days(1),
            draft: false,
        },
        Post {
            at: now - TimeDelta::days(2),
            draft: true,
        },
    ];

    let visible = c.post_filter(now).apply(&posts);
    assert_eq!(visible.len(), 2);
    assert!(std::ptr::eq(visible[0], &posts[0]));
    assert!(std::ptr::eq(visible[1], &posts[1]));

    let preview = c.post_filter(now).preview(true).apply(&posts);
    assert_eq!(preview.len(), 3);
    assert!(preview.iter().all(|p| !p.draft));
}

#[test]
fn dates_use_site_zone_unless_overridden() {
    let c = SiteConfig::builtin();
    // 20:30 UTC is already the next day in Shanghai.
    let instant = Utc.with_ymd_and_hms(2024, 3, 4, 20, 30, 0).unwrap();

    assert_eq!(c.display_date(instant, None), "5 Mar, 2024");
    assert_eq!(c.datetime_attr(instant, None), "2024-03-05T04:30:00+08:00");

    let london = TimeZoneName::parse("Europe/London").unwrap();
    assert_eq!(c.display_date(instant, Some(london)), "4 Mar, 2024");
    assert_eq!(
        c.datetime_attr(instant, Some(london)),
        "2024-03-04T20:30:00+00:00"
    );
}
