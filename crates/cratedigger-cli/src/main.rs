// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::{
    ArtistArgs, Cli, CollectionArgs, Commands, ExportArgs, LabelArgs, MasterArgs, SearchArgs,
    WantlistArgs,
};
use cratedigger_client::{
    CollectionQuery, DiscogsClient, ErrorCategory, RetryPolicy, SearchQuery, SearchType, SortOrder,
};
use cratedigger_config::{AppConfig, RetryConfig};
use cratedigger_export::{ExportFormat, Exporter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cratedigger_config::load(cli.config.as_deref())?;
    init_tracing(&config.telemetry.log_level);

    let client = build_client(&config)?;

    match cli.command {
        Commands::Search(search) => run_search(&client, &config, cli.json, search).await?,
        Commands::Artist(artist) => run_artist(&client, &config, cli.json, artist).await?,
        Commands::Release(release) => {
            let payload = client.release(release.id).await?;
            emit(cli.json, &payload, output::print_release)?;
        }
        Commands::Master(master) => run_master(&client, cli.json, master).await?,
        Commands::Label(label) => run_label(&client, cli.json, label).await?,
        Commands::User(user) => {
            let payload = client.user(&user.username).await?;
            emit(cli.json, &payload, output::print_user)?;
        }
        Commands::Collection(collection) => {
            run_collection(&client, &config, cli.json, collection).await?
        }
        Commands::Wantlist(wantlist) => run_wantlist(&client, &config, cli.json, wantlist).await?,
        Commands::Status => run_status(&client, &config, cli.json).await?,
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let fmt_layer = fmt::layer().with_target(true).with_thread_names(true).with_level(true);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn build_client(config: &AppConfig) -> Result<DiscogsClient> {
    let mut builder = DiscogsClient::builder()
        .base_url(&config.api.base_url)
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .rate_limit(
            config.rate_limit.max_requests,
            Duration::from_secs(config.rate_limit.time_window_secs),
        )
        .retry_policy(retry_policy(&config.retry));

    if let Some(token) = &config.api.token {
        builder = builder.token(token);
    }
    if let Some(user_agent) = &config.api.user_agent {
        builder = builder.user_agent(user_agent);
    }

    Ok(builder.build()?)
}

fn retry_policy(retry: &RetryConfig) -> RetryPolicy {
    RetryPolicy {
        max_retries: retry.max_retries,
        backoff_factor: retry.backoff_factor,
        max_delay: Duration::from_secs(retry.max_delay_secs),
        retry_on: parse_retry_categories(&retry.retry_on),
    }
}

fn parse_retry_categories(names: &[String]) -> Vec<ErrorCategory> {
    names
        .iter()
        .filter_map(|name| match name.parse::<ErrorCategory>() {
            Ok(category) => Some(category),
            Err(err) => {
                warn!(target: "cli", "ignoring retry category: {err}");
                None
            }
        })
        .collect()
}

/// Print a payload as pretty JSON or via the plain-text renderer.
fn emit<T: Serialize>(json: bool, payload: &T, print: impl Fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(payload)?);
    } else {
        print(payload);
    }
    Ok(())
}

fn resolve_export(config: &AppConfig, export: &ExportArgs) -> Result<(Exporter, ExportFormat)> {
    let format = match &export.format {
        Some(name) => name.parse::<ExportFormat>()?,
        None => config
            .export
            .format
            .parse::<ExportFormat>()
            .context("invalid export.format in configuration")?,
    };
    let dir = export.out.clone().unwrap_or_else(|| config.export.dir.clone());
    Ok((Exporter::new(dir), format))
}

fn build_search_query(search: &SearchArgs) -> SearchQuery {
    SearchQuery {
        query: search.query.clone(),
        search_type: search.search_type.map(SearchType::from),
        title: search.title.clone(),
        artist: search.artist.clone(),
        genre: search.genre.clone(),
        style: search.style.clone(),
        year: search.year.clone(),
        country: search.country.clone(),
        page: search.page.page,
        per_page: search.page.per_page,
    }
}

async fn run_search(
    client: &DiscogsClient,
    config: &AppConfig,
    json: bool,
    search: SearchArgs,
) -> Result<()> {
    let results = client.search(build_search_query(&search)).await?;

    if search.export.export {
        let (exporter, format) = resolve_export(config, &search.export)?;
        let path = exporter.export_search("search", format, &results)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    emit(json, &results, output::print_search)
}

async fn run_artist(
    client: &DiscogsClient,
    config: &AppConfig,
    json: bool,
    artist: ArtistArgs,
) -> Result<()> {
    if artist.export.export {
        let releases = client
            .artist_releases(artist.id, artist.page.page, artist.page.per_page)
            .await?;
        let (exporter, format) = resolve_export(config, &artist.export)?;
        let stem = format!("{}-releases", artist.id);
        let path = exporter.export_artist_releases(&stem, format, &releases)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let payload = client.artist(artist.id).await?;
    emit(json, &payload, output::print_artist)?;

    if artist.releases {
        let releases = client
            .artist_releases(artist.id, artist.page.page, artist.page.per_page)
            .await?;
        emit(json, &releases, output::print_artist_releases)?;
    }

    Ok(())
}

async fn run_master(client: &DiscogsClient, json: bool, master: MasterArgs) -> Result<()> {
    let payload = client.master(master.id).await?;
    emit(json, &payload, output::print_master)?;

    if master.versions {
        let versions = client
            .master_versions(master.id, master.page.page, master.page.per_page)
            .await?;
        emit(json, &versions, output::print_master_versions)?;
    }

    Ok(())
}

async fn run_label(client: &DiscogsClient, json: bool, label: LabelArgs) -> Result<()> {
    let payload = client.label(label.id).await?;
    emit(json, &payload, output::print_label)?;

    if label.releases {
        let releases = client
            .label_releases(label.id, label.page.page, label.page.per_page)
            .await?;
        emit(json, &releases, output::print_label_releases)?;
    }

    Ok(())
}

async fn run_collection(
    client: &DiscogsClient,
    config: &AppConfig,
    json: bool,
    collection: CollectionArgs,
) -> Result<()> {
    let query = CollectionQuery {
        folder: collection.folder,
        page: collection.page.page,
        per_page: collection.page.per_page,
        sort: collection.sort.clone(),
        sort_order: collection.sort_order.map(SortOrder::from),
    };
    let payload = client.collection(&collection.username, query).await?;

    if collection.export.export {
        let (exporter, format) = resolve_export(config, &collection.export)?;
        let stem = format!("{}-collection", collection.username);
        let path = exporter.export_collection(&stem, format, &payload)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    emit(json, &payload, output::print_collection)
}

async fn run_status(client: &DiscogsClient, config: &AppConfig, json: bool) -> Result<()> {
    let identity = match &config.api.token {
        Some(_) => Some(client.identity().await.context("token check failed")?),
        None => None,
    };
    let status = client.rate_limit_status().await;

    if json {
        let value = serde_json::json!({
            "authenticated_as": identity.as_ref().map(|identity| identity.username.clone()),
            "requests_made": status.requests_made,
            "requests_remaining": status.requests_remaining,
            "time_window_secs": status.time_window.as_secs(),
            "reset_after_secs": status.reset_after.as_secs_f64(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match &identity {
            Some(identity) => println!("authenticated as {}", identity.username),
            None => println!("no token configured, anonymous access"),
        }
        output::print_status(&status);
    }

    Ok(())
}

async fn run_wantlist(
    client: &DiscogsClient,
    config: &AppConfig,
    json: bool,
    wantlist: WantlistArgs,
) -> Result<()> {
    let payload = client
        .wantlist(&wantlist.username, wantlist.page.page, wantlist.page.per_page)
        .await?;

    if wantlist.export.export {
        let (exporter, format) = resolve_export(config, &wantlist.export)?;
        let stem = format!("{}-wantlist", wantlist.username);
        let path = exporter.export_wantlist(&stem, format, &payload)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    emit(json, &payload, output::print_wantlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_retry_categories_filters_unknown() {
        let names = vec![
            "throttled".to_string(),
            "bogus".to_string(),
            "server".to_string(),
        ];
        let categories = parse_retry_categories(&names);
        assert_eq!(categories, [ErrorCategory::Throttled, ErrorCategory::Server]);
    }

    #[test]
    fn test_search_args_map_to_query() {
        let cli = Cli::try_parse_from([
            "cratedigger",
            "search",
            "nevermind",
            "--type",
            "release",
            "--artist",
            "Nirvana",
            "--year",
            "1991",
            "--page",
            "2",
            "--per-page",
            "50",
        ])
        .unwrap();

        let Commands::Search(search) = cli.command else {
            panic!("expected the search subcommand");
        };
        let query = build_search_query(&search);

        assert_eq!(query.query.as_deref(), Some("nevermind"));
        assert_eq!(query.search_type, Some(SearchType::Release));
        assert_eq!(query.artist.as_deref(), Some("Nirvana"));
        assert_eq!(query.year.as_deref(), Some("1991"));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.per_page, Some(50));
    }

    #[test]
    fn test_resolve_export_prefers_flags_over_config() {
        let config = AppConfig::default();

        let defaults = ExportArgs {
            export: true,
            format: None,
            out: None,
        };
        let (exporter, format) = resolve_export(&config, &defaults).unwrap();
        assert_eq!(format, ExportFormat::Json);
        assert_eq!(exporter.dir(), Path::new("exports"));

        let overridden = ExportArgs {
            export: true,
            format: Some("csv".to_string()),
            out: Some(PathBuf::from("/tmp/digs")),
        };
        let (exporter, format) = resolve_export(&config, &overridden).unwrap();
        assert_eq!(format, ExportFormat::Csv);
        assert_eq!(exporter.dir(), Path::new("/tmp/digs"));

        let bad = ExportArgs {
            export: true,
            format: Some("xlsx".to_string()),
            out: None,
        };
        assert!(resolve_export(&config, &bad).is_err());
    }
}
