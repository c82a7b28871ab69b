// SPDX-License-Identifier: GPL-3.0-or-later

use clap::{Parser, Subcommand, ValueEnum};
use cratedigger_client::{SearchType, SortOrder};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cratedigger",
    author,
    version,
    about = "Discogs client with rate limiting, retry, and export"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Print raw JSON instead of formatted text")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search the Discogs database")]
    Search(SearchArgs),
    #[command(about = "Look up an artist, optionally with their releases")]
    Artist(ArtistArgs),
    #[command(about = "Look up a release")]
    Release(ReleaseArgs),
    #[command(about = "Look up a master release, optionally with its versions")]
    Master(MasterArgs),
    #[command(about = "Look up a label, optionally with its releases")]
    Label(LabelArgs),
    #[command(about = "Look up a user profile")]
    User(UserArgs),
    #[command(about = "List a user's collection folder")]
    Collection(CollectionArgs),
    #[command(about = "List a user's wantlist")]
    Wantlist(WantlistArgs),
    #[command(about = "Check the configured token and show the rate limit window")]
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SearchTypeValue {
    Release,
    Master,
    Artist,
    Label,
}

impl From<SearchTypeValue> for SearchType {
    fn from(value: SearchTypeValue) -> Self {
        match value {
            SearchTypeValue::Release => SearchType::Release,
            SearchTypeValue::Master => SearchType::Master,
            SearchTypeValue::Artist => SearchType::Artist,
            SearchTypeValue::Label => SearchType::Label,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortOrderValue {
    Asc,
    Desc,
}

impl From<SortOrderValue> for SortOrder {
    fn from(value: SortOrderValue) -> Self {
        match value {
            SortOrderValue::Asc => SortOrder::Asc,
            SortOrderValue::Desc => SortOrder::Desc,
        }
    }
}

#[derive(clap::Args)]
pub struct SearchArgs {
    #[arg(help = "Free-text query")]
    pub query: Option<String>,
    #[arg(long = "type", value_enum, help = "Restrict results to one record type")]
    pub search_type: Option<SearchTypeValue>,
    #[arg(long, help = "Filter by artist name")]
    pub artist: Option<String>,
    #[arg(long, help = "Filter by release title")]
    pub title: Option<String>,
    #[arg(long, help = "Filter by genre")]
    pub genre: Option<String>,
    #[arg(long, help = "Filter by style")]
    pub style: Option<String>,
    #[arg(long, help = "Filter by year or range, e.g. 1991 or 1990-1995")]
    pub year: Option<String>,
    #[arg(long, help = "Filter by country")]
    pub country: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(clap::Args)]
pub struct ArtistArgs {
    pub id: u64,
    #[arg(long, help = "Also list the artist's releases")]
    pub releases: bool,
    #[command(flatten)]
    pub page: PageArgs,
    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(clap::Args)]
pub struct ReleaseArgs {
    pub id: u64,
}

#[derive(clap::Args)]
pub struct MasterArgs {
    pub id: u64,
    #[arg(long, help = "Also list the master's versions")]
    pub versions: bool,
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(clap::Args)]
pub struct LabelArgs {
    pub id: u64,
    #[arg(long, help = "Also list the label's releases")]
    pub releases: bool,
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(clap::Args)]
pub struct UserArgs {
    pub username: String,
}

#[derive(clap::Args)]
pub struct CollectionArgs {
    pub username: String,
    #[arg(long, help = "Collection folder ID (0 is the built-in All folder)")]
    pub folder: Option<u64>,
    #[arg(long, help = "Sort field, e.g. added, artist, title, year")]
    pub sort: Option<String>,
    #[arg(long, value_enum, help = "Sort direction")]
    pub sort_order: Option<SortOrderValue>,
    #[command(flatten)]
    pub page: PageArgs,
    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(clap::Args)]
pub struct WantlistArgs {
    pub username: String,
    #[command(flatten)]
    pub page: PageArgs,
    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(clap::Args)]
pub struct PageArgs {
    #[arg(long, help = "Result page, starting at 1")]
    pub page: Option<u32>,
    #[arg(long, help = "Results per page (max 100)")]
    pub per_page: Option<u32>,
}

#[derive(clap::Args)]
pub struct ExportArgs {
    #[arg(long, help = "Write the results to the export directory")]
    pub export: bool,
    #[arg(
        long,
        value_name = "FORMAT",
        help = "Export format: json or csv (defaults to the configured format)"
    )]
    pub format: Option<String>,
    #[arg(
        long,
        value_name = "DIR",
        help = "Export directory (defaults to the configured directory)"
    )]
    pub out: Option<PathBuf>,
}
