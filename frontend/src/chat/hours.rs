use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::Tz;

/// When the support team answers chats. Only drives the banner text.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessHours {
    pub timezone: Tz,
    pub days: &'static [Weekday],
    /// Opening hour, inclusive.
    pub open_hour: u32,
    /// Closing hour, exclusive.
    pub close_hour: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Asia::Kolkata,
            days: &[
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ],
            open_hour: 9,
            close_hour: 18,
        }
    }
}

impl BusinessHours {
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        let local = now.with_timezone(&self.timezone);
        self.days.contains(&local.weekday())
            && local.hour() >= self.open_hour
            && local.hour() < self.close_hour
    }

    pub fn is_open_now(&self) -> bool {
        self.is_open_at(Utc::now())
    }

    pub fn status_text(&self, open: bool) -> String {
        if open {
            "We're online! Typically replies in a few minutes.".to_string()
        } else {
            format!(
                "We're offline right now. Our team is available Mon–Sat, {}:00–{}:00 IST. Leave your details and we'll call you back.",
                self.open_hour, self.close_hour
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn weekday_morning_in_india_is_open() {
        // 2026-10-19 is a Monday; 04:00 UTC is 09:30 IST
        assert!(BusinessHours::default().is_open_at(utc(2026, 10, 19, 4, 0)));
    }

    #[test]
    fn before_opening_is_closed() {
        // 03:00 UTC is 08:30 IST
        assert!(!BusinessHours::default().is_open_at(utc(2026, 10, 19, 3, 0)));
    }

    #[test]
    fn closing_hour_is_exclusive() {
        // 12:30 UTC is 18:00 IST
        assert!(!BusinessHours::default().is_open_at(utc(2026, 10, 19, 12, 30)));
        // 12:29 UTC is 17:59 IST
        assert!(BusinessHours::default().is_open_at(utc(2026, 10, 19, 12, 29)));
    }

    #[test]
    fn sunday_is_closed() {
        // 2026-10-25 is a Sunday; 06:00 UTC is 11:30 IST
        assert!(!BusinessHours::default().is_open_at(utc(2026, 10, 25, 6, 0)));
    }

    #[test]
    fn day_boundary_uses_local_date() {
        // Saturday 20:00 UTC is already Sunday 01:30 IST
        assert!(!BusinessHours::default().is_open_at(utc(2026, 10, 24, 20, 0)));
        // Sunday 23:00 UTC is Monday 04:30 IST, still before opening
        assert!(!BusinessHours::default().is_open_at(utc(2026, 10, 25, 23, 0)));
    }

    #[test]
    fn offline_text_mentions_hours() {
        let text = BusinessHours::default().status_text(false);
        assert!(text.contains("9:00–18:00"));
    }
}
