//! batch midpoint search over a CSV file of groups. each input row names a
//! group and its ';'-separated stations; each output row holds the group's
//! fairest meeting station or the reason none was found.
use std::{
    io::Read,
    path::Path,
    sync::{Arc, Mutex},
};

use itertools::Itertools;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::MidpointAppError;
use crate::service::MidpointService;

pub const MIDPOINT_UNAVAILABLE: &str = "midpoint unavailable";
const STATION_DELIMITER: char = ';';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRow {
    pub group_id: String,
    pub stations: String,
}

impl GroupRow {
    pub fn station_names(&self) -> Vec<&str> {
        self.stations
            .split(STATION_DELIMITER)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MidpointRow {
    pub group_id: String,
    pub midpoint: Option<String>,
    pub fairness: Option<u32>,
    pub total_minutes: Option<u64>,
    pub message: String,
}

impl MidpointRow {
    pub fn evaluate(group: &GroupRow, service: &MidpointService) -> MidpointRow {
        match service.fair_midpoint(&group.station_names()) {
            Some(suggestion) => MidpointRow {
                group_id: group.group_id.clone(),
                midpoint: Some(suggestion.station.to_string()),
                fairness: Some(suggestion.fairness),
                total_minutes: Some(suggestion.total_minutes),
                message: String::from("success"),
            },
            None => MidpointRow {
                group_id: group.group_id.clone(),
                midpoint: None,
                fairness: None,
                total_minutes: None,
                message: String::from(MIDPOINT_UNAVAILABLE),
            },
        }
    }
}

/// reads group rows from a CSV source with a `group_id,stations` header.
pub fn read_groups<R: Read>(reader: R) -> Result<Vec<GroupRow>, MidpointAppError> {
    let rows = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize::<GroupRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// evaluates every group on a pool of `parallelism` threads. output rows
/// keep the input order.
pub fn evaluate_groups(
    service: &MidpointService,
    groups: &[GroupRow],
    parallelism: usize,
) -> Result<Vec<MidpointRow>, MidpointAppError> {
    if parallelism == 0 {
        return Err(MidpointAppError::InvalidUserInput(String::from(
            "parallelism must be at least 1",
        )));
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .build()
        .map_err(|e| MidpointAppError::ThreadPoolError(e.to_string()))?;
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("midpoint search")
            .total(groups.len())
            .build()
            .map_err(MidpointAppError::ProgressBarError)?,
    ));

    let rows = pool.install(|| {
        groups
            .par_iter()
            .map(|group| {
                let row = MidpointRow::evaluate(group, service);
                if let Ok(mut bar) = bar.clone().lock() {
                    let _ = bar.update(1);
                }
                row
            })
            .collect::<Vec<_>>()
    });
    eprintln!();
    Ok(rows)
}

/// writes rows to a CSV file. fails if the file exists and `overwrite` is false.
pub fn write_rows(
    output: &Path,
    rows: &[MidpointRow],
    overwrite: bool,
) -> Result<(), MidpointAppError> {
    if output.exists() && !overwrite {
        let filename = output.to_str().unwrap_or_default();
        return Err(MidpointAppError::InvalidUserInput(format!(
            "output file '{filename}' exists and overwrite is false"
        )));
    }
    let mut writer = csv::Writer::from_path(output)?;
    for row in rows.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// runs a batch midpoint search from an input CSV file to an output CSV file,
/// returning the number of rows written.
pub fn run_batch(
    service: &MidpointService,
    input: &Path,
    output: &Path,
    parallelism: usize,
    overwrite: bool,
) -> Result<usize, MidpointAppError> {
    let file = std::fs::File::open(input)?;
    let groups = read_groups(file)?;
    log::info!(
        "read {} groups from {}",
        groups.len(),
        input.to_str().unwrap_or_default()
    );
    let rows = evaluate_groups(service, &groups, parallelism)?;
    let n_unavailable = rows.iter().filter(|r| r.midpoint.is_none()).count();
    if n_unavailable > 0 {
        log::warn!("{n_unavailable} of {} groups have no midpoint", rows.len());
    }
    write_rows(output, &rows, overwrite)?;
    Ok(rows.len())
}
