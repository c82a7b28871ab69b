// SPDX-License-Identifier: GPL-3.0-or-later

use crate::endpoint::SortOrder;
use serde::{Deserialize, Serialize};

/// Pagination block attached to every Discogs list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    /// Total matching items across all pages.
    pub items: u64,
    #[serde(default)]
    pub urls: PageUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageUrls {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

/// Database search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub pagination: Pagination,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One database search hit.
///
/// Search results are shallow summaries: `year` comes back as a string
/// here (unlike the numeric year on full releases) and most descriptive
/// fields only appear for some result types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    #[serde(rename = "type")]
    pub result_type: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub style: Vec<String>,
    #[serde(default)]
    pub label: Vec<String>,
    #[serde(default)]
    pub format: Vec<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub master_id: Option<u64>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Restricts a database search to one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Release,
    Master,
    Artist,
    Label,
}

impl SearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Release => "release",
            SearchType::Master => "master",
            SearchType::Artist => "artist",
            SearchType::Label => "label",
        }
    }
}

/// Search query parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Free-text query.
    pub query: Option<String>,
    pub search_type: Option<SearchType>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub style: Option<String>,
    /// Year or year range, e.g. "1991" or "1990-1995".
    pub year: Option<String>,
    pub country: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchQuery {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Collection listing parameters.
#[derive(Debug, Clone, Default)]
pub struct CollectionQuery {
    /// Collection folder; folder 0 is the built-in "All" folder.
    pub folder: Option<u64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Sort field, e.g. "added", "artist", "title", "year".
    pub sort: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl CollectionQuery {
    pub fn folder(mut self, folder: u64) -> Self {
        self.folder = Some(folder);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(field.into());
        self.sort_order = Some(order);
        self
    }
}

/// Full artist record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub namevariations: Vec<String>,
    #[serde(default)]
    pub members: Vec<BandMember>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub releases_url: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub data_quality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BandMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Paginated releases credited to an artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistReleases {
    pub pagination: Pagination,
    #[serde(default)]
    pub releases: Vec<ArtistRelease>,
}

/// Entry in an artist's release list; either a master or a release,
/// indicated by `release_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRelease {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type", default)]
    pub release_type: Option<String>,
    /// Main release ID when this entry is a master.
    #[serde(default)]
    pub main_release: Option<u64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Full release record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub year: Option<u32>,
    /// Full release date when known, e.g. "1991-09-24".
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub artists: Vec<ReleaseArtist>,
    #[serde(default)]
    pub labels: Vec<ReleaseLabel>,
    #[serde(default)]
    pub formats: Vec<Format>,
    #[serde(default)]
    pub tracklist: Vec<Track>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub master_id: Option<u64>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseArtist {
    pub id: u64,
    pub name: String,
    /// Artist name variation as credited on this release.
    #[serde(default)]
    pub anv: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseLabel {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    /// Catalog number assigned by this label.
    #[serde(default)]
    pub catno: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Format {
    pub name: String,
    /// Quantity, serialized as a string on the wire.
    #[serde(default)]
    pub qty: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    #[serde(default)]
    pub position: String,
    pub title: String,
    #[serde(default)]
    pub duration: String,
}

/// Master release record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Master {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub year: Option<u32>,
    /// The release considered canonical for this master.
    #[serde(default)]
    pub main_release: Option<u64>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub artists: Vec<ReleaseArtist>,
    #[serde(default)]
    pub tracklist: Vec<Track>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Paginated versions of a master release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterVersions {
    pub pagination: Pagination,
    #[serde(default)]
    pub versions: Vec<MasterVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterVersion {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub catno: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Full label record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub sublabels: Vec<LabelRef>,
    #[serde(default)]
    pub parent_label: Option<LabelRef>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub data_quality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Paginated releases issued on a label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelReleases {
    pub pagination: Pagination,
    #[serde(default)]
    pub releases: Vec<LabelRelease>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRelease {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub catno: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// The account a token authenticates as.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub consumer_name: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Public user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub registered: Option<String>,
    #[serde(default)]
    pub num_collection: Option<u64>,
    #[serde(default)]
    pub num_wantlist: Option<u64>,
    #[serde(default)]
    pub num_for_sale: Option<u64>,
    #[serde(default)]
    pub releases_contributed: Option<u64>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Paginated contents of a collection folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub pagination: Pagination,
    #[serde(default)]
    pub releases: Vec<CollectionItem>,
}

/// One collected copy of a release. The same release can appear several
/// times with distinct `instance_id`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: u64,
    pub instance_id: u64,
    #[serde(default)]
    pub folder_id: Option<u64>,
    /// Owner rating, 0 (unrated) to 5.
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub date_added: Option<String>,
    pub basic_information: BasicInformation,
}

/// Release summary carried by collection and wantlist entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInformation {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub artists: Vec<ReleaseArtist>,
    #[serde(default)]
    pub labels: Vec<ReleaseLabel>,
    #[serde(default)]
    pub formats: Vec<Format>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub master_id: Option<u64>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Paginated wantlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wantlist {
    pub pagination: Pagination,
    #[serde(default)]
    pub wants: Vec<WantlistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WantlistItem {
    pub id: u64,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
    pub basic_information: BasicInformation,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Confirmation returned when a release is added to a collection folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionAdded {
    pub instance_id: u64,
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Parameters for creating a user list.
#[derive(Debug, Clone, Serialize)]
pub struct NewList {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
}

impl NewList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            public: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }
}

/// A user list as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}
