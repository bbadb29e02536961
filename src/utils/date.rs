use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Inclusive range of civil dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Resolve a single period token: YYYY-MM-DD, YYYY-MM or YYYY.
fn period_from_token(p: &str) -> Option<Period> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Some(Period { start: d, end: d });
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        let last = last_day_of_month(first.year(), first.month())?;
        return Some(Period {
            start: first,
            end: last,
        });
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Some(Period {
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        });
    }

    None
}

/// Parse a period filter: a single token, or "A:B" spanning from the start
/// of A to the end of B.
pub fn parse_period(p: &str) -> AppResult<Period> {
    let p = p.trim();

    let period = match p.split_once(':') {
        Some((a, b)) => {
            let from = period_from_token(a.trim());
            let to = period_from_token(b.trim());
            match (from, to) {
                (Some(f), Some(t)) if f.start <= t.end => Some(Period {
                    start: f.start,
                    end: t.end,
                }),
                _ => None,
            }
        }
        None => period_from_token(p),
    };

    period.ok_or_else(|| AppError::InvalidPeriod(p.to_string()))
}
