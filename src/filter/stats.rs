use crate::filter::Criteria;
use crate::person::{Person, Tag};
use serde::Serialize;
use std::io::{self, Write};

/// Metadata included in JSON statistics output.
#[derive(Serialize)]
pub struct Meta<'a> {
    pub target_tag: Tag,
    pub criteria: &'a Criteria,
}

/// Scan counters for a single tag.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TagStats {
    pub scanned: u64,
    pub matched: u64,
}

/// Accumulates per-run match statistics while the roster is scanned.
///
/// The filter itself stays pure; the binary records each decision here and
/// reports the totals at the end of the run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct StatsCollector {
    pub records_scanned: u64,
    pub records_matched: u64,
    /// Rejected because the record's tag differed from the target tag.
    pub rejected_wrong_tag: u64,
    /// Right tag, but at least one criteria field disagreed.
    pub rejected_criteria: u64,
    pub user: TagStats,
    pub admin: TagStats,
}

impl StatsCollector {
    #[must_use]
    pub fn new() -> Self {
        StatsCollector::default()
    }

    /// Records one filter decision. `target` is the tag the run selects.
    pub fn record(&mut self, person: &Person, target: Tag, matched: bool) {
        self.records_scanned += 1;
        let per_tag = match person.tag() {
            Tag::User => &mut self.user,
            Tag::Admin => &mut self.admin,
        };
        per_tag.scanned += 1;
        if matched {
            self.records_matched += 1;
            per_tag.matched += 1;
        } else if person.tag() != target {
            self.rejected_wrong_tag += 1;
        } else {
            self.rejected_criteria += 1;
        }
    }

    /// Prints a human-readable summary.
    pub fn print_stats(&self, target: Tag, mut writer: impl Write) -> io::Result<()> {
        writeln!(writer, "--- roster-filter summary ---")?;
        writeln!(writer, "Target Tag:        {target}")?;
        writeln!(writer, "Records Scanned:   {}", self.records_scanned)?;
        writeln!(writer, "Records Matched:   {}", self.records_matched)?;
        writeln!(writer, "Rejected (tag):    {}", self.rejected_wrong_tag)?;
        writeln!(writer, "Rejected (fields): {}", self.rejected_criteria)?;
        let percentage = if self.records_scanned > 0 {
            (self.records_matched as f64 / self.records_scanned as f64) * 100.0
        } else {
            0.0
        };
        writeln!(writer, "Percentage Matched: {percentage:.2}%")?;
        writeln!(
            writer,
            "Per Tag: user {}/{}, admin {}/{}",
            self.user.matched, self.user.scanned, self.admin.matched, self.admin.scanned
        )?;
        writeln!(writer, "-----------------------------")
    }

    /// Prints the summary as JSON to the given writer (e.g. stderr).
    pub fn print_stats_json(&self, target: Tag, criteria: &Criteria, mut writer: impl Write) {
        #[derive(Serialize)]
        struct Output<'a> {
            meta: Meta<'a>,
            stats: &'a StatsCollector,
        }

        let output = Output {
            meta: Meta {
                target_tag: target,
                criteria,
            },
            stats: self,
        };
        let _ = serde_json::to_writer_pretty(&mut writer, &output);
        let _ = writeln!(writer);
    }
}
