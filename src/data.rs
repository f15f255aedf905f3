// src/data.rs
//! Dashboard data source: a comparison table from an explicit path, or the
//! bundled sample when none is configured or it can't be read.

use std::fs::File;
use std::path::{ Path, PathBuf };

use tracing::{ info, warn };

use crate::aggregate::SourceAggregate;
use crate::config::options::DashboardOptions;
use crate::csv::read_comparison;
use crate::error::{ Error, Result };
use crate::rank::{ rank, Ranking };

const SAMPLE_COMPARISON: &str = include_str!("../assets/sample_comparison.csv");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataOrigin {
    File(PathBuf),
    Sample,
}

impl DataOrigin {
    pub fn describe(&self) -> String {
        match self {
            DataOrigin::File(p) => format!("Loaded {}", p.display()),
            DataOrigin::Sample => s!("Showing bundled sample data"),
        }
    }
}

/// Resolve what the Rankings tab shows before any analysis has run.
pub fn load_dashboard_ranking(opts: &DashboardOptions) -> (Ranking, DataOrigin) {
    if let Some(path) = &opts.comparison_csv {
        match load_comparison_file(path) {
            Ok(r) => {
                info!("Dashboard data: {} ({} sources)", path.display(), r.len());
                return (r, DataOrigin::File(path.clone()));
            }
            Err(e) => warn!("Dashboard data unavailable ({}); falling back to sample", e),
        }
    }
    (sample_ranking(), DataOrigin::Sample)
}

pub fn load_comparison_file(path: &Path) -> Result<Ranking> {
    let delim = if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("tsv")) { b'\t' } else { b',' };
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let rows = read_comparison(file, delim)?;
    Ok(ranking_from_rows(rows.iter().map(|r| r.to_aggregate())))
}

pub fn sample_ranking() -> Ranking {
    match read_comparison(SAMPLE_COMPARISON.as_bytes(), b',') {
        Ok(rows) => ranking_from_rows(rows.iter().map(|r| r.to_aggregate())),
        Err(e) => {
            warn!("Bundled sample unreadable: {}", e);
            Ranking::default()
        }
    }
}

fn ranking_from_rows(aggs: impl Iterator<Item = SourceAggregate>) -> Ranking {
    let aggs: Vec<SourceAggregate> = aggs.collect();
    rank(&aggs)
}
