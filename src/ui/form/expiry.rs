//! The "valid until" date sent with every save.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Abbreviated month names as written in pt-BR (`toLocaleDateString`
/// with `month: "short"`).
const SHORT_MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Same month and day, next year. Feb 29 rolls over to Mar 1.
pub fn one_year_after(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

/// Formats as `"10 de mar. de 2025"`.
pub fn format_valid_until(date: NaiveDate) -> String {
    format!(
        "{} de {}. de {}",
        date.day(),
        SHORT_MONTHS_PT_BR[date.month0() as usize],
        date.year()
    )
}

/// Validity for a save submitted at `now`: one calendar year later.
pub fn valid_until_from<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format_valid_until(one_year_after(now.date_naive()))
}

/// Validity for a save submitted right now, in local time.
pub fn valid_until_now() -> String {
    valid_until_from(&Local::now())
}
