use std::path::Path;

use anyhow::Result;
use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc,
};

use crate::models::GlobalHistoryEntry;
use crate::parsers::read_jsonl_file;
use crate::utils::history_file_path;

/// Filters and paging for [`get_history`]; every field is optional and they combine with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryOptions {
    /// Inclusive lower bound on the entry timestamp; undated entries never match a bound
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the entry timestamp
    pub end: Option<DateTime<Utc>>,
    /// Exact match on the entry's `project` field
    pub project: Option<String>,
    /// Maximum number of entries returned; `None` or `0` returns every match
    pub limit: Option<usize>,
}

impl HistoryOptions {
    fn matches(&self, entry: &GlobalHistoryEntry) -> bool {
        self.start.is_none_or(|start| entry.timestamp.is_some_and(|ts| ts >= start))
            && self.end.is_none_or(|end| entry.timestamp.is_some_and(|ts| ts <= end))
            && self.project.as_deref().is_none_or(|project| entry.project.as_deref() == Some(project))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryResult {
    /// Matching entries, newest first, cut to the limit
    pub entries: Vec<GlobalHistoryEntry>,
    /// Number of matches before the limit was applied
    pub total_count: usize,
}

/// Query the global `history.jsonl` log
///
/// Loads the whole log, keeps the entries matching `options`, sorts them newest first
/// (entries without a timestamp last, in file order) and truncates to `options.limit`. `total_count` reports the match count before
/// truncation so callers can page. A missing log is an empty history.
///
/// # Errors
///
/// Returns an error if the log cannot be read or contains a malformed line.
pub fn get_history(claude_dir: &Path, options: &HistoryOptions) -> Result<HistoryResult> {
    let entries: Vec<GlobalHistoryEntry> = read_jsonl_file(&history_file_path(claude_dir))?;

    let mut matched: Vec<GlobalHistoryEntry> =
        entries.into_iter().filter(|entry| options.matches(entry)).collect();
    // `None` orders below every timestamp, so undated entries land at the end
    matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let total_count = matched.len();
    if let Some(limit) = options.limit.filter(|limit| *limit > 0) {
        matched.truncate(limit);
    }

    Ok(HistoryResult { entries: matched, total_count })
}

/// First instant of `date` in the local timezone (00:00:00.000)
///
/// If a DST jump skips local midnight, the day starts at the first instant after the gap.
pub fn local_day_start(date: NaiveDate) -> DateTime<Utc> {
    day_start(date, |naive| Local.offset_from_local_datetime(naive))
}

/// Last millisecond of `date` in the local timezone (23:59:59.999)
///
/// This is always one millisecond before the next day's [`local_day_start`].
pub fn local_day_end(date: NaiveDate) -> DateTime<Utc> {
    day_end(date, |naive| Local.offset_from_local_datetime(naive))
}

fn day_start(
    date: NaiveDate,
    offset_at: impl Fn(&NaiveDateTime) -> LocalResult<FixedOffset>,
) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    let offset = match offset_at(&midnight) {
        LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => offset,
        // Midnight was skipped: the offset in force before the jump maps it onto the
        // transition instant
        LocalResult::None => match offset_at(&(midnight - Duration::days(1))) {
            LocalResult::Single(offset) | LocalResult::Ambiguous(_, offset) => offset,
            LocalResult::None => return midnight.and_utc(),
        },
    };
    (midnight - offset).and_utc()
}

fn day_end(
    date: NaiveDate,
    offset_at: impl Fn(&NaiveDateTime) -> LocalResult<FixedOffset>,
) -> DateTime<Utc> {
    match date.succ_opt() {
        Some(next) => day_start(next, offset_at) - Duration::milliseconds(1),
        None => date
            .and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN))
            .and_utc(),
    }
}
