// SPDX-License-Identifier: GPL-3.0-or-later

//! Discogs API client with client-side rate limiting and retry.
//!
//! This crate provides a typed client for the Discogs REST API. Every
//! request passes through a sliding-window rate limiter sized to the
//! documented Discogs quota, and transient failures (throttling, server
//! errors, transport faults) are retried with jittered exponential
//! backoff. A `Retry-After` hint from the server takes precedence over
//! the computed delay.

pub mod backoff;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod rate_limiter;
pub mod retry;

pub use client::{DiscogsClient, DiscogsClientBuilder};
pub use endpoint::{Endpoint, SortOrder, MAX_PER_PAGE};
pub use error::{DiscogsError, ErrorCategory, Result};
pub use models::{
    Artist, ArtistRelease, ArtistReleases, BandMember, BasicInformation, Collection,
    CollectionAdded, CollectionItem, CollectionQuery, Format, Identity, Label, LabelRef,
    LabelRelease, LabelReleases, Master, MasterVersion, MasterVersions, NewList, PageUrls,
    Pagination, Release, ReleaseArtist, ReleaseLabel, SearchQuery, SearchResult, SearchResults,
    SearchType, Track, User, UserList, Wantlist, WantlistItem,
};
pub use rate_limiter::{RateLimiter, RateLimiterStatus};
pub use retry::{run_with_retry, RetryPolicy};
