use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

fn bad(r: &str) -> AppError {
    AppError::InvalidDate(format!(
        "'{r}' (expected YYYY, YYYY-MM, YYYY-MM-DD or START:END)"
    ))
}

/// First and last day covered by a single period: YYYY, YYYY-MM or YYYY-MM-DD.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| bad(p))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad(p))?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad(p))?;
            Ok((first, last))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| bad(p))?;
            let (ny, nm) = if first.month() == 12 {
                (first.year() + 1, 1)
            } else {
                (first.year(), first.month() + 1)
            };
            let last = NaiveDate::from_ymd_opt(ny, nm, 1)
                .and_then(|d| d.pred_opt())
                .ok_or_else(|| bad(p))?;
            Ok((first, last))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad(p))?;
            Ok((d, d))
        }
        _ => Err(bad(p)),
    }
}

/// Parse `--range`: a single period or `START:END` of two periods.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match r.split_once(':') {
        Some((start, end)) => {
            let (from, _) = period_bounds(start)?;
            let (_, to) = period_bounds(end)?;
            if from > to {
                return Err(bad(r));
            }
            Ok((from, to))
        }
        None => period_bounds(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2024").unwrap(), (d(2024, 1, 1), d(2024, 12, 31)));
        assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(parse_range("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
        assert_eq!(parse_range("2025-06-02").unwrap(), (d(2025, 6, 2), d(2025, 6, 2)));
    }

    #[test]
    fn intervals_and_errors() {
        assert_eq!(
            parse_range("2025-05:2025-06-10").unwrap(),
            (d(2025, 5, 1), d(2025, 6, 10))
        );
        assert!(parse_range("2025-06:2025-05").is_err());
        assert!(parse_range("June").is_err());
        assert!(parse_range("2025-13").is_err());
    }
}
