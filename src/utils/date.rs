//! 上课日期解析
//!
//! 课表导出的日期格式为 `D/M/YYYY`（日/月/年，不补零）。无法解析时沿用旧系统的行为，
//! 回退为当前时间，但会通过 `fell_back` 标记出来，由调用方记录日志并计数。

use chrono::{DateTime, NaiveDate, Utc};

/// 日期解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedStudyDate {
    // Unix 时间戳（秒），UTC 零点
    pub timestamp: i64,
    // 是否回退为当前时间
    pub fell_back: bool,
}

/// 解析 `D/M/YYYY` 格式的上课日期
///
/// 以下情况回退为 `now`：
/// - 字段缺省或为空
/// - 以 `/` 分割后少于 3 段
/// - 任一段不是数字
/// - 日历上不存在的日期（如 31/2/2026）
pub fn parse_study_date(raw: Option<&str>, now: DateTime<Utc>) -> ParsedStudyDate {
    match raw.and_then(parse_dmy) {
        Some(date) => ParsedStudyDate {
            timestamp: date.and_hms_opt(0, 0, 0).map_or(now.timestamp(), |dt| {
                dt.and_utc().timestamp()
            }),
            fell_back: false,
        },
        None => ParsedStudyDate {
            timestamp: now.timestamp(),
            fell_back: true,
        },
    }
}

fn parse_dmy(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    // 年份后可能带有时间等尾缀，如 "23/1/2026 07:00"
    let year: i32 = parts[2].split_whitespace().next()?.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_parses_day_month_year() {
        let parsed = parse_study_date(Some("23/1/2026"), fixed_now());
        assert!(!parsed.fell_back);

        let date = DateTime::<Utc>::from_timestamp(parsed.timestamp, 0).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 1, 23));
        assert_eq!(date.timestamp() % 86_400, 0);
    }

    #[test]
    fn test_zero_padded_and_trailing_time() {
        let parsed = parse_study_date(Some(" 05/09/2025 07:00 "), fixed_now());
        assert!(!parsed.fell_back);
        let date = DateTime::<Utc>::from_timestamp(parsed.timestamp, 0).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 9, 5));
    }

    #[test]
    fn test_too_few_parts_falls_back_to_now() {
        let now = fixed_now();
        let parsed = parse_study_date(Some("23/1"), now);
        assert!(parsed.fell_back);
        assert_eq!(parsed.timestamp, now.timestamp());
    }

    #[test]
    fn test_missing_and_garbage_fall_back() {
        let now = fixed_now();
        assert!(parse_study_date(None, now).fell_back);
        assert!(parse_study_date(Some("2026-01-23"), now).fell_back);
        assert!(parse_study_date(Some("a/b/c"), now).fell_back);
        assert!(parse_study_date(Some("31/2/2026"), now).fell_back);
    }
}
