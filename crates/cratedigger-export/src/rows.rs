// SPDX-License-Identifier: GPL-3.0-or-later

//! Flat, one-record-per-line projections of API payloads for CSV export.
//!
//! Multi-valued fields (artists, genres, labels) are joined into a single
//! cell rather than exploded into extra rows.

use cratedigger_client::{
    ArtistRelease, CollectionItem, Format, ReleaseArtist, ReleaseLabel, SearchResult, WantlistItem,
};
use serde::Serialize;

/// One search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRow {
    pub id: u64,
    pub kind: String,
    pub title: String,
    pub year: String,
    pub country: String,
    pub genres: String,
    pub styles: String,
    pub labels: String,
    pub formats: String,
}

impl From<&SearchResult> for SearchRow {
    fn from(result: &SearchResult) -> Self {
        Self {
            id: result.id,
            kind: result.result_type.clone(),
            title: result.title.clone(),
            year: result.year.clone().unwrap_or_default(),
            country: result.country.clone().unwrap_or_default(),
            genres: result.genre.join("; "),
            styles: result.style.join("; "),
            labels: result.label.join("; "),
            formats: result.format.join("; "),
        }
    }
}

/// One collected release instance.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionRow {
    pub release_id: u64,
    pub instance_id: u64,
    pub artist: String,
    pub title: String,
    pub year: Option<u32>,
    pub formats: String,
    pub labels: String,
    pub genres: String,
    pub rating: Option<u8>,
    pub date_added: String,
}

impl From<&CollectionItem> for CollectionRow {
    fn from(item: &CollectionItem) -> Self {
        let info = &item.basic_information;
        Self {
            release_id: info.id,
            instance_id: item.instance_id,
            artist: join_artists(&info.artists),
            title: info.title.clone(),
            year: info.year,
            formats: join_formats(&info.formats),
            labels: join_labels(&info.labels),
            genres: info.genres.join("; "),
            rating: item.rating,
            date_added: item.date_added.clone().unwrap_or_default(),
        }
    }
}

/// One wanted release.
#[derive(Debug, Clone, Serialize)]
pub struct WantRow {
    pub release_id: u64,
    pub artist: String,
    pub title: String,
    pub year: Option<u32>,
    pub formats: String,
    pub rating: Option<u8>,
    pub notes: String,
    pub date_added: String,
}

impl From<&WantlistItem> for WantRow {
    fn from(item: &WantlistItem) -> Self {
        let info = &item.basic_information;
        Self {
            release_id: info.id,
            artist: join_artists(&info.artists),
            title: info.title.clone(),
            year: info.year,
            formats: join_formats(&info.formats),
            rating: item.rating,
            notes: item.notes.clone().unwrap_or_default(),
            date_added: item.date_added.clone().unwrap_or_default(),
        }
    }
}

/// One entry from an artist's release list.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistReleaseRow {
    pub id: u64,
    pub kind: String,
    pub role: String,
    pub title: String,
    pub artist: String,
    pub year: Option<u32>,
}

impl From<&ArtistRelease> for ArtistReleaseRow {
    fn from(release: &ArtistRelease) -> Self {
        Self {
            id: release.id,
            kind: release.release_type.clone().unwrap_or_default(),
            role: release.role.clone().unwrap_or_default(),
            title: release.title.clone(),
            artist: release.artist.clone().unwrap_or_default(),
            year: release.year,
        }
    }
}

fn join_artists(artists: &[ReleaseArtist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_labels(labels: &[ReleaseLabel]) -> String {
    labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_formats(formats: &[Format]) -> String {
    formats
        .iter()
        .map(|format| format.name.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
