//! Table command: JSON reference table for cross-checking other implementations.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, info_span};

use epiweek_core::{EpiWeek, WeekSystem, iter_weeks};

use crate::cli::TableArgs;
use crate::config::EpiweekConfig;

/// Conversions for every day and every epi-year in a range.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTable {
    pub system: WeekSystem,
    /// `YYYY-MM-DD` -> epiweek label.
    pub date_to_epiweek: BTreeMap<String, WeekLabel>,
    /// `yyyy01` -> week 1 start, `yyyyww_end` -> end of the last week.
    pub epiweek_to_date: BTreeMap<String, String>,
    /// `yyyy` -> weeks in the epi-year.
    pub weeks_in_year: BTreeMap<String, u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekLabel {
    pub year: i32,
    pub week: i32,
}

/// Builds the table for calendar years `start_year..=end_year`.
pub fn build_table(start_year: i32, end_year: i32, system: WeekSystem) -> Result<ReferenceTable> {
    if start_year > end_year {
        bail!("start_year ({start_year}) must not exceed end_year ({end_year})");
    }

    let mut date_to_epiweek = BTreeMap::new();
    let first = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .with_context(|| format!("year {start_year} out of range"))?;
    let last = NaiveDate::from_ymd_opt(end_year, 12, 31)
        .with_context(|| format!("year {end_year} out of range"))?;
    for date in first.iter_days().take_while(|d| *d <= last) {
        let week = EpiWeek::from_date(date, system)?;
        date_to_epiweek.insert(
            date.to_string(),
            WeekLabel {
                year: week.year(),
                week: week.week(),
            },
        );
    }

    let mut epiweek_to_date = BTreeMap::new();
    let mut weeks_in_year = BTreeMap::new();
    for year in start_year..=end_year {
        let weeks = iter_weeks(year, system)?;
        let n_weeks = weeks.len() as u8;
        for week in weeks {
            if week.week() == 1 {
                epiweek_to_date.insert(week.to_string(), week.start_of_week()?.to_string());
            }
            if week.week() == i32::from(n_weeks) {
                epiweek_to_date.insert(format!("{week}_end"), week.end_date()?.to_string());
            }
        }
        weeks_in_year.insert(year.to_string(), n_weeks);
    }

    Ok(ReferenceTable {
        system,
        date_to_epiweek,
        epiweek_to_date,
        weeks_in_year,
    })
}

/// Builds the reference table and writes it as pretty JSON.
pub fn run(args: TableArgs, config: &EpiweekConfig, system: WeekSystem) -> Result<()> {
    let _cmd = info_span!("table").entered();
    let start_year = args.start_year.unwrap_or(config.table.start_year);
    let end_year = args.end_year.unwrap_or(config.table.end_year);

    let table = build_table(start_year, end_year, system)?;
    info!(
        start_year,
        end_year,
        %system,
        n_dates = table.date_to_epiweek.len(),
        "reference table built"
    );

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &table)
                .context("failed to serialise reference table")?;
            writer.flush()?;
            info!(path = %path.display(), "reference table written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, &table)
                .context("failed to serialise reference table")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
