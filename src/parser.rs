//! Matrix parser for the "Appointment List - By Operator" report.
//!
//! The report is a header-less, multi-section grid: a single row carries
//! the TIME/GUEST/SERVICE/DURATION column labels, and everything below it
//! is a mix of date section rows, operator header rows, appointment rows,
//! totals rows and blank separators. `locate_header` finds the label row;
//! `extract_records` walks the rows below it as a single-pass state
//! machine carrying the current date and operator.

use crate::error::{Error, Result};
use crate::grid::Grid;
use chrono::NaiveDate;

/// Column labels that identify the header row.
pub const REQUIRED_LABELS: [&str; 4] = ["TIME", "GUEST", "SERVICE", "DURATION"];

const MONTH_ABBREVS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Location of the header row and of each labelled column within it.
/// Duplicate labels in the same row resolve to the leftmost occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPosition {
    pub row: usize,
    pub time: usize,
    pub guest: usize,
    pub service: usize,
    pub duration: usize,
}

/// One appointment as recovered from the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRecord {
    /// Operator name exactly as it appeared in the report.
    pub operator: String,
    /// First whitespace token of the operator name, used for roster matching.
    pub operator_key: String,
    pub date: NaiveDate,
    /// Raw time token as it appeared, e.g. "9:30".
    pub time: String,
    pub service: String,
    /// First digit run from the duration cell, or empty.
    pub duration: String,
    pub guest: String,
}

/// Scan the grid from the top for the first row whose trimmed, upper-cased
/// cells contain all four required labels.
pub fn locate_header(grid: &Grid) -> Result<HeaderPosition> {
    for r in 0..grid.row_count() {
        let upper: Vec<String> = grid
            .row(r)
            .iter()
            .map(|c| c.display().to_uppercase())
            .collect();
        let found = REQUIRED_LABELS
            .map(|label| upper.iter().position(|value| value == label));

        if let [Some(time), Some(guest), Some(service), Some(duration)] = found {
            return Ok(HeaderPosition {
                row: r,
                time,
                guest,
                service,
                duration,
            });
        }
    }
    Err(Error::HeaderNotFound)
}

/// How a single row below the header classifies. The variants mirror the
/// report layout; classification is stateless so each rule can be tested
/// on its own.
#[derive(Debug, PartialEq)]
enum RowKind<'a> {
    /// A row announcing a new calendar date section.
    DateHeader(NaiveDate),
    /// A row announcing a new operator block (name in the TIME column).
    OperatorHeader(&'a str),
    /// A concrete appointment row.
    Appointment {
        time: &'a str,
        guest: &'a str,
        service: &'a str,
        duration: &'a str,
    },
    /// Blank separators, section titles, totals and anything malformed.
    Skip,
}

fn classify_row<'a>(cells: &'a [String], header: &HeaderPosition) -> RowKind<'a> {
    if let Some(date) = parse_month_header(cells) {
        return RowKind::DateHeader(date);
    }

    let at = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");
    let time = at(header.time);
    let guest = at(header.guest);
    let service = at(header.service);

    if !time.is_empty() && !contains_time_token(time) && guest.is_empty() && service.is_empty() {
        return RowKind::OperatorHeader(time);
    }

    if contains_time_token(time) && !guest.is_empty() && !service.is_empty() {
        return RowKind::Appointment {
            time,
            guest,
            service,
            duration: at(header.duration),
        };
    }

    RowKind::Skip
}

/// Walk the rows strictly below the header, carrying the current date and
/// operator across sections. Rows that classify as appointments before
/// both contexts are established emit nothing; extraction never fails.
pub fn extract_records(grid: &Grid, header: &HeaderPosition) -> Vec<AppointmentRecord> {
    let mut current_date: Option<NaiveDate> = None;
    let mut current_operator: Option<String> = None;
    let mut out = Vec::new();

    for r in header.row + 1..grid.row_count() {
        let cells: Vec<String> = grid.row(r).iter().map(|c| c.display()).collect();

        match classify_row(&cells, header) {
            RowKind::DateHeader(date) => current_date = Some(date),
            RowKind::OperatorHeader(name) => current_operator = Some(name.to_string()),
            RowKind::Appointment {
                time,
                guest,
                service,
                duration,
            } => {
                if let (Some(date), Some(operator)) = (current_date, current_operator.as_deref()) {
                    out.push(AppointmentRecord {
                        operator: operator.to_string(),
                        operator_key: first_name_key(operator).to_string(),
                        date,
                        time: time.to_string(),
                        service: service.to_string(),
                        duration: first_digit_run(duration).to_string(),
                        guest: guest.to_string(),
                    });
                }
            }
            RowKind::Skip => {}
        }
    }
    out
}

/// Detect a date section row: join the row's non-empty cells with single
/// spaces and look for a `month day year` token window. The month token is
/// a three-letter English abbreviation prefix with only letters after it
/// (so "January" matches, "Jan." does not); day is 1-2 digits, year is 4.
/// A window that matches but names an invalid calendar date makes the row
/// non-matching rather than an error.
fn parse_month_header(cells: &[String]) -> Option<NaiveDate> {
    let joined = cells
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let tokens: Vec<&str> = joined.split_whitespace().collect();

    for window in tokens.windows(3) {
        let month = match month_number(window[0]) {
            Some(m) => m,
            None => continue,
        };
        if !is_digits(window[1], 1, 2) || !is_digits(window[2], 4, 4) {
            continue;
        }
        let day: u32 = window[1].parse().ok()?;
        let year: i32 = window[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    None
}

fn month_number(token: &str) -> Option<u32> {
    if token.len() < 3 || !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let prefix = token[..3].to_ascii_lowercase();
    MONTH_ABBREVS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
}

fn is_digits(token: &str, min_len: usize, max_len: usize) -> bool {
    token.len() >= min_len
        && token.len() <= max_len
        && token.bytes().all(|b| b.is_ascii_digit())
}

/// True if the text contains an `H:MM`/`HH:MM` run anywhere. Substring
/// semantics: "9:30 am" and "@9:30" both count.
fn contains_time_token(text: &str) -> bool {
    let bytes = text.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        for hour_len in [2usize, 1] {
            let colon = start + hour_len;
            if colon + 3 > bytes.len() {
                continue;
            }
            if bytes[start..colon].iter().all(u8::is_ascii_digit)
                && bytes[colon] == b':'
                && bytes[colon + 1..colon + 3].iter().all(u8::is_ascii_digit)
            {
                return true;
            }
        }
    }
    false
}

fn first_name_key(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

fn first_digit_run(text: &str) -> &str {
    let bytes = text.as_bytes();
    let start = match bytes.iter().position(u8::is_ascii_digit) {
        Some(i) => i,
        None => return "",
    };
    let len = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    &text[start..start + len]
}
