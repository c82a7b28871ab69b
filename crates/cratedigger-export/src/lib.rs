// SPDX-License-Identifier: GPL-3.0-or-later

//! Export of Discogs API data to JSON or CSV files.
//!
//! JSON exports preserve the full typed payload; CSV exports flatten each
//! entry into one spreadsheet-friendly row (see [`rows`]).

pub mod rows;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::rows::{ArtistReleaseRow, CollectionRow, SearchRow, WantRow};
use cratedigger_client::{ArtistReleases, Collection, SearchResults, Wantlist};

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown export format: {0} (expected \"json\" or \"csv\")")]
pub struct ParseFormatError(String);

impl std::str::FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Writes exports under a base directory, creating it on demand.
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export search results as `<stem>.<ext>`, returning the written path.
    pub fn export_search(
        &self,
        stem: &str,
        format: ExportFormat,
        results: &SearchResults,
    ) -> Result<PathBuf> {
        match format {
            ExportFormat::Json => self.write_json(stem, results),
            ExportFormat::Csv => {
                let rows: Vec<SearchRow> = results.results.iter().map(SearchRow::from).collect();
                self.write_csv(stem, &rows)
            }
        }
    }

    /// Export a collection page as `<stem>.<ext>`, returning the written path.
    pub fn export_collection(
        &self,
        stem: &str,
        format: ExportFormat,
        collection: &Collection,
    ) -> Result<PathBuf> {
        match format {
            ExportFormat::Json => self.write_json(stem, collection),
            ExportFormat::Csv => {
                let rows: Vec<CollectionRow> =
                    collection.releases.iter().map(CollectionRow::from).collect();
                self.write_csv(stem, &rows)
            }
        }
    }

    /// Export a wantlist page as `<stem>.<ext>`, returning the written path.
    pub fn export_wantlist(
        &self,
        stem: &str,
        format: ExportFormat,
        wantlist: &Wantlist,
    ) -> Result<PathBuf> {
        match format {
            ExportFormat::Json => self.write_json(stem, wantlist),
            ExportFormat::Csv => {
                let rows: Vec<WantRow> = wantlist.wants.iter().map(WantRow::from).collect();
                self.write_csv(stem, &rows)
            }
        }
    }

    /// Export an artist's release list as `<stem>.<ext>`.
    pub fn export_artist_releases(
        &self,
        stem: &str,
        format: ExportFormat,
        releases: &ArtistReleases,
    ) -> Result<PathBuf> {
        match format {
            ExportFormat::Json => self.write_json(stem, releases),
            ExportFormat::Csv => {
                let rows: Vec<ArtistReleaseRow> = releases
                    .releases
                    .iter()
                    .map(ArtistReleaseRow::from)
                    .collect();
                self.write_csv(stem, &rows)
            }
        }
    }

    fn target_path(&self, stem: &str, format: ExportFormat) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        Ok(self.dir.join(format!("{stem}.{}", format.extension())))
    }

    fn write_json<T: Serialize>(&self, stem: &str, value: &T) -> Result<PathBuf> {
        let path = self.target_path(stem, ExportFormat::Json)?;
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        debug!(target: "export", "wrote {}", path.display());
        Ok(path)
    }

    fn write_csv<R: Serialize>(&self, stem: &str, rows: &[R]) -> Result<PathBuf> {
        let path = self.target_path(stem, ExportFormat::Csv)?;
        let mut writer = csv::Writer::from_writer(File::create(&path)?);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        debug!(target: "export", "wrote {}", path.display());
        Ok(path)
    }
}
