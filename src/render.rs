//! Terminal rendering for schedule events.

use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use uurrooster_core::{Event, EventType};

pub const ALL_DAY_MARKER: &str = "De volledige dag";

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = if self.all_day {
            ALL_DAY_MARKER.to_string()
        } else {
            let range = format!(
                "{} - {}",
                self.start_date_time.format("%H:%M"),
                self.end_date_time.format("%H:%M")
            );
            format!("{:>width$}", range, width = ALL_DAY_MARKER.len())
        };

        let title = match self.event_type {
            EventType::Academic => self.title.cyan().to_string(),
            EventType::Other => self.title.to_string(),
        };

        let mut line = format!("{} {}", time, title);
        if !self.location.is_empty() {
            line.push_str(&format!(" {}", format!("@ {}", self.location).dimmed()));
        }
        line.push_str(&format!(" {}", format!("({})", self.id).dimmed()));
        line
    }
}

/// Day heading, e.g. "ma 03/02/2025"
pub fn format_day(dt: &NaiveDateTime) -> String {
    format!("{} {}", weekday_nl(dt), format_date(dt))
}

pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y").to_string()
}

pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

fn weekday_nl(dt: &NaiveDateTime) -> &'static str {
    use chrono::{Datelike, Weekday};

    match dt.weekday() {
        Weekday::Mon => "ma",
        Weekday::Tue => "di",
        Weekday::Wed => "wo",
        Weekday::Thu => "do",
        Weekday::Fri => "vr",
        Weekday::Sat => "za",
        Weekday::Sun => "zo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(&at(9, 0)), "ma 03/02/2025");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time(&at(14, 5)), "03/02/2025 14:05");
        assert_eq!(format_date(&at(14, 5)), "03/02/2025");
    }

    #[test]
    fn test_render_includes_location_and_id() {
        let mut event = Event::new("Les", at(9, 0), at(11, 0)).with_location("B.201");
        event.id = "abc".to_string();

        let line = event.render();

        assert!(line.contains("09:00 - 11:00"));
        assert!(line.contains("B.201"));
        assert!(line.contains("abc"));
    }

    #[test]
    fn test_render_all_day_marker() {
        let event = Event::new("Sportdag", at(0, 0), at(23, 59)).with_all_day(true);
        let line = event.render();

        assert!(line.starts_with("De volledige dag "));
        assert!(!line.contains("00:00 - 23:59"));
    }

    #[test]
    fn test_time_column_matches_marker_width() {
        let event = Event::new("Les", at(9, 0), at(11, 0));
        assert!(event.render().starts_with("   09:00 - 11:00 "));
    }
}
