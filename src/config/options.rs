// src/config/options.rs
use std::io;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };
use tracing::debug;

use super::consts::*;
use crate::error::{ Error, Result };

/// Everything a run (CLI or GUI) is configured with.
/// Loaded from TOML; every field falls back to its default when missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub analysis: AnalysisOptions,
    pub export: ExportOptions,
    pub dashboard: DashboardOptions,
}

impl AppOptions {
    /// Resolve the config file: explicit path > `REVIEW_SENTIMENT_CONFIG` > `./review_sentiment.toml`.
    /// Only the implicit default may be absent; a named file that is missing is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let path = match named {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::io(
                        &p,
                        io::Error::new(io::ErrorKind::NotFound, "config file not found"),
                    ));
                }
                p
            }
            None => {
                let p = PathBuf::from(CONFIG_FILE);
                if !p.exists() {
                    debug!("No {} in working directory, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                p
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let opts = Self::from_toml(&text).map_err(|source| Error::Config { path: path.clone(), source })?;
        debug!("Loaded options from {}", path.display());
        Ok(opts)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Directory holding one `*.txt` review dump per source.
    pub input_dir: PathBuf,
    /// Segments whose trimmed text is this long or shorter are dropped.
    pub min_review_chars: usize,
    /// Classifier input cap, in characters. Longer texts are truncated.
    pub max_input_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_IN_DIR),
            min_review_chars: MIN_REVIEW_CHARS,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub format: ExportFormat,
    /// Also write the plain-text ranking report next to the table.
    pub write_report: bool,
    /// Also write one classified-reviews table and one text report per source.
    pub write_reviews: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: ExportFormat::Csv,
            write_report: true,
            write_reviews: false,
        }
    }
}

impl ExportOptions {
    pub fn comparison_path(&self) -> PathBuf {
        self.out_dir.join(join_ext(COMPARISON_FILE, self.format.ext()))
    }

    pub fn report_path(&self) -> PathBuf {
        self.out_dir.join(REPORT_FILE)
    }

    /// `<out_dir>/<stem>_sentiment_analysis.<ext>` for one source.
    pub fn reviews_path(&self, source_stem: &str) -> PathBuf {
        let mut stem = s!(source_stem);
        stem.push_str(REVIEWS_FILE_SUFFIX);
        self.out_dir.join(join_ext(&stem, self.format.ext()))
    }

    /// `<out_dir>/<stem>_sentiment_report.txt` for one source.
    pub fn source_report_path(&self, source_stem: &str) -> PathBuf {
        let mut stem = s!(source_stem);
        stem.push_str(SOURCE_REPORT_SUFFIX);
        self.out_dir.join(join_ext(&stem, "txt"))
    }
}

fn join_ext(stem: &str, ext: &str) -> String {
    let mut name = s!(stem);
    name.push('.');
    name.push_str(ext);
    name
}

/// Where the dashboard reads its ranking table from before any analysis runs.
/// `None` (or an unreadable file) means the embedded sample.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOptions {
    pub comparison_csv: Option<PathBuf>,
}
