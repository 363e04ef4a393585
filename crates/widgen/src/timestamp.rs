use crate::TimeUnit;
use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Calendar fields decoded from an identifier's timestamp prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Always 0 in `sec` mode.
    pub millisecond: u32,
}

impl Timestamp {
    /// Re-renders the fields as the fixed-width calendar prefix.
    pub fn render(&self, unit: TimeUnit) -> String {
        match unit {
            TimeUnit::Sec => format!(
                "{:04}{:02}{:02}T{:02}{:02}{:02}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            ),
            TimeUnit::Ms => format!(
                "{:04}{:02}{:02}T{:02}{:02}{:02}{:03}",
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
                self.second,
                self.millisecond
            ),
        }
    }

    /// Reassembles the UTC instant these fields describe.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
        .single()?
        .with_nanosecond(self.millisecond * 1_000_000)
    }
}

/// Gregorian leap-year rule: divisible by 4, except centuries unless
/// divisible by 400.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Parses exactly `n` decimal digits into a non-negative value.
pub(crate) fn digits_i64(b: &[u8]) -> Option<i64> {
    let mut v: i64 = 0;
    for &c in b {
        if !c.is_ascii_digit() {
            return None;
        }
        v = v * 10 + i64::from(c - b'0');
    }
    Some(v)
}

/// Formats `tick` as the fixed-width UTC calendar prefix.
///
/// For `ms`, the tick is split into seconds and a 3-digit millisecond field
/// via Euclidean division, so negative ticks render a non-negative field.
pub fn format_tick(tick: i64, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Sec => {
            let dt = Utc
                .timestamp_opt(tick, 0)
                .single()
                .expect("tick within chrono's representable range");
            dt.format("%Y%m%dT%H%M%S").to_string()
        }
        TimeUnit::Ms => {
            let sec = tick.div_euclid(1000);
            let ms = tick.rem_euclid(1000) as u32;
            let dt = Utc
                .timestamp_opt(sec, ms * 1_000_000)
                .single()
                .expect("tick within chrono's representable range");
            dt.format("%Y%m%dT%H%M%S%3f").to_string()
        }
    }
}

/// Byte-level parser shared with the validator, which must not assume its
/// input is valid UTF-8 at any particular offset.
pub(crate) fn parse_timestamp_bytes(b: &[u8], unit: TimeUnit) -> Option<Timestamp> {
    if b.len() != unit.timestamp_len() || b[8] != b'T' {
        return None;
    }

    let year = digits_i64(&b[0..4])? as i32;
    let month = digits_i64(&b[4..6])? as u32;
    let day = digits_i64(&b[6..8])? as u32;
    let hour = digits_i64(&b[9..11])? as u32;
    let minute = digits_i64(&b[11..13])? as u32;
    let second = digits_i64(&b[13..15])? as u32;
    let millisecond = match unit {
        TimeUnit::Sec => 0,
        TimeUnit::Ms => digits_i64(&b[15..18])? as u32,
    };

    if !(1..=12).contains(&month) {
        return None;
    }
    if !(1..=days_in_month(year, month)).contains(&day) {
        return None;
    }
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    Some(Timestamp {
        year,
        month,
        day,
        hour,
        minute,
        second,
        millisecond,
    })
}

/// Parses a fixed-width calendar prefix.
///
/// Accepts only the exact 15-character (`sec`) or 18-character (`ms`) form
/// with the sentinel `T` at offset 8, and applies Gregorian calendar
/// validity. No timezone suffix is permitted inside this field.
pub fn parse_timestamp(s: &str, unit: TimeUnit) -> Option<Timestamp> {
    parse_timestamp_bytes(s.as_bytes(), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fixed_widths() {
        // 2026-02-12T09:15:30 UTC
        let sec_tick = 1_770_887_730;
        assert_eq!(format_tick(sec_tick, TimeUnit::Sec), "20260212T091530");
        assert_eq!(
            format_tick(sec_tick * 1000 + 123, TimeUnit::Ms),
            "20260212T091530123"
        );
    }

    #[test]
    fn negative_ms_tick_uses_euclidean_split() {
        assert_eq!(format_tick(-1, TimeUnit::Ms), "19691231T235959999");
    }

    #[test]
    fn parses_and_re_renders() {
        let ts = parse_timestamp("20260212T091530", TimeUnit::Sec).unwrap();
        assert_eq!(
            ts,
            Timestamp {
                year: 2026,
                month: 2,
                day: 12,
                hour: 9,
                minute: 15,
                second: 30,
                millisecond: 0
            }
        );
        assert_eq!(ts.render(TimeUnit::Sec), "20260212T091530");

        let ms = parse_timestamp("20260212T091530123", TimeUnit::Ms).unwrap();
        assert_eq!(ms.millisecond, 123);
        assert_eq!(ms.render(TimeUnit::Ms), "20260212T091530123");
        assert_eq!(ms.to_datetime().unwrap().timestamp_subsec_millis(), 123);
    }

    #[test]
    fn enforces_calendar_validity() {
        // leap day accepted in 2024, rejected in 2023
        assert!(parse_timestamp("20240229T000000", TimeUnit::Sec).is_some());
        assert!(parse_timestamp("20230229T000000", TimeUnit::Sec).is_none());
        // century rule: 1900 is not a leap year, 2000 is
        assert!(parse_timestamp("19000229T000000", TimeUnit::Sec).is_none());
        assert!(parse_timestamp("20000229T000000", TimeUnit::Sec).is_some());

        assert!(parse_timestamp("20261312T091530", TimeUnit::Sec).is_none());
        assert!(parse_timestamp("20260200T091530", TimeUnit::Sec).is_none());
        assert!(parse_timestamp("20260212T241530", TimeUnit::Sec).is_none());
        assert!(parse_timestamp("20260212T096030", TimeUnit::Sec).is_none());
        assert!(parse_timestamp("20260212T091560", TimeUnit::Sec).is_none());
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(parse_timestamp("20260212T09153", TimeUnit::Sec).is_none());
        assert!(parse_timestamp("20260212T0915301", TimeUnit::Sec).is_none());
        assert!(parse_timestamp("20260212X091530", TimeUnit::Sec).is_none());
        assert!(parse_timestamp("20260212T09153o", TimeUnit::Sec).is_none());
        // sec-width string is not a valid ms prefix
        assert!(parse_timestamp("20260212T091530", TimeUnit::Ms).is_none());
    }
}
