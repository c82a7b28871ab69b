// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use url::Url;

/// Hard cap Discogs places on the `per_page` parameter.
pub const MAX_PER_PAGE: u32 = 100;

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// A Discogs API route plus its query parameters.
///
/// The path is fixed by the constructor; query parameters accumulate
/// through the fluent helpers and are appended when the endpoint is
/// resolved against a base URL.
#[derive(Debug, Clone)]
pub struct Endpoint {
    path: String,
    params: Vec<(String, String)>,
}

impl Endpoint {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn search() -> Self {
        Self::new("database/search")
    }

    pub fn identity() -> Self {
        Self::new("oauth/identity")
    }

    pub fn artist(artist_id: u64) -> Self {
        Self::new(format!("artists/{artist_id}"))
    }

    pub fn artist_releases(artist_id: u64) -> Self {
        Self::new(format!("artists/{artist_id}/releases"))
    }

    pub fn release(release_id: u64) -> Self {
        Self::new(format!("releases/{release_id}"))
    }

    pub fn master(master_id: u64) -> Self {
        Self::new(format!("masters/{master_id}"))
    }

    pub fn master_versions(master_id: u64) -> Self {
        Self::new(format!("masters/{master_id}/versions"))
    }

    pub fn label(label_id: u64) -> Self {
        Self::new(format!("labels/{label_id}"))
    }

    pub fn label_releases(label_id: u64) -> Self {
        Self::new(format!("labels/{label_id}/releases"))
    }

    pub fn user(username: &str) -> Self {
        Self::new(format!("users/{username}"))
    }

    pub fn collection(username: &str, folder_id: u64) -> Self {
        Self::new(format!(
            "users/{username}/collection/folders/{folder_id}/releases"
        ))
    }

    pub fn collection_release(username: &str, folder_id: u64, release_id: u64) -> Self {
        Self::new(format!(
            "users/{username}/collection/folders/{folder_id}/releases/{release_id}"
        ))
    }

    pub fn wantlist(username: &str) -> Self {
        Self::new(format!("users/{username}/wants"))
    }

    pub fn lists(username: &str) -> Self {
        Self::new(format!("users/{username}/lists"))
    }

    /// Append an arbitrary query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Request a result page. Pages are 1-indexed; zero is coerced to 1.
    pub fn page(self, page: u32) -> Self {
        self.param("page", page.max(1).to_string())
    }

    /// Set the page size, capped at the API maximum of 100.
    pub fn per_page(self, per_page: u32) -> Self {
        self.param("per_page", per_page.min(MAX_PER_PAGE).to_string())
    }

    pub fn sort(self, field: impl Into<String>, order: SortOrder) -> Self {
        self.param("sort", field).param("sort_order", order.as_str())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolve against a base URL, appending accumulated query pairs.
    pub fn url(&self, base: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", base.trim_end_matches('/'), self.path))?;
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.discogs.com";

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::search().path(), "database/search");
        assert_eq!(Endpoint::artist(125246).path(), "artists/125246");
        assert_eq!(
            Endpoint::artist_releases(125246).path(),
            "artists/125246/releases"
        );
        assert_eq!(Endpoint::release(367084).path(), "releases/367084");
        assert_eq!(
            Endpoint::master_versions(13814).path(),
            "masters/13814/versions"
        );
        assert_eq!(
            Endpoint::collection("digger", 0).path(),
            "users/digger/collection/folders/0/releases"
        );
        assert_eq!(
            Endpoint::collection_release("digger", 1, 367084).path(),
            "users/digger/collection/folders/1/releases/367084"
        );
        assert_eq!(Endpoint::wantlist("digger").path(), "users/digger/wants");
    }

    #[test]
    fn test_url_appends_query_pairs() {
        let url = Endpoint::search()
            .param("q", "Nirvana")
            .param("type", "release")
            .url(BASE)
            .unwrap();

        assert_eq!(url.path(), "/database/search");
        assert_eq!(
            url.query(),
            Some("q=Nirvana&type=release"),
            "unexpected query in {url}"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash_in_base() {
        let url = Endpoint::artist(125246)
            .url("https://api.discogs.com/")
            .unwrap();
        assert_eq!(url.as_str(), "https://api.discogs.com/artists/125246");
    }

    #[test]
    fn test_query_values_are_encoded() {
        let url = Endpoint::search()
            .param("q", "Guns N' Roses")
            .url(BASE)
            .unwrap();
        assert_eq!(url.query(), Some("q=Guns+N%27+Roses"));
    }

    #[test]
    fn test_page_is_one_indexed() {
        let url = Endpoint::search().page(0).url(BASE).unwrap();
        assert_eq!(url.query(), Some("page=1"));

        let url = Endpoint::search().page(7).url(BASE).unwrap();
        assert_eq!(url.query(), Some("page=7"));
    }

    #[test]
    fn test_per_page_is_capped() {
        let url = Endpoint::search().per_page(250).url(BASE).unwrap();
        assert_eq!(url.query(), Some("per_page=100"));

        let url = Endpoint::search().per_page(25).url(BASE).unwrap();
        assert_eq!(url.query(), Some("per_page=25"));
    }

    #[test]
    fn test_sort_adds_field_and_order() {
        let url = Endpoint::collection("digger", 0)
            .sort("added", SortOrder::Desc)
            .url(BASE)
            .unwrap();
        assert_eq!(url.query(), Some("sort=added&sort_order=desc"));
    }
}
