//! Shared fixtures for domain service tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{DisplayName, EmailAddress, User, UserId};

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) struct FixtureClock {
    pub(crate) utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> FixtureClock {
    FixtureClock {
        utc_now: fixture_timestamp(),
    }
}

pub(crate) fn make_user(name: &str, points: u64) -> User {
    let local_part: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    User::new(
        UserId::random(),
        DisplayName::new(name).expect("fixture display name"),
        EmailAddress::new(format!("{local_part}@example.com")).expect("fixture email"),
        fixture_timestamp(),
    )
    .with_total_points(points)
}
