// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain-text rendering of API payloads for the terminal.

use cratedigger_client::{
    Artist, ArtistReleases, Collection, Label, LabelReleases, Master, MasterVersions, Pagination,
    RateLimiterStatus, Release, SearchResults, User, Wantlist,
};

fn print_page_line(pagination: &Pagination) {
    println!(
        "{} items, page {} of {}",
        pagination.items, pagination.page, pagination.pages
    );
}

pub fn print_search(results: &SearchResults) {
    print_page_line(&results.pagination);
    for result in &results.results {
        let year = result.year.as_deref().unwrap_or("----");
        println!(
            "  {:>10}  {:<7}  {}  ({})",
            result.id, result.result_type, result.title, year
        );
    }
}

pub fn print_artist(artist: &Artist) {
    println!("{} (id {})", artist.name, artist.id);
    if !artist.namevariations.is_empty() {
        println!("  also as: {}", artist.namevariations.join(", "));
    }
    if !artist.members.is_empty() {
        let names: Vec<&str> = artist
            .members
            .iter()
            .map(|member| member.name.as_str())
            .collect();
        println!("  members: {}", names.join(", "));
    }
    if let Some(profile) = &artist.profile {
        println!("  {}", profile);
    }
}

pub fn print_artist_releases(releases: &ArtistReleases) {
    print_page_line(&releases.pagination);
    for release in &releases.releases {
        let year = release
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        let kind = release.release_type.as_deref().unwrap_or("release");
        println!(
            "  {:>10}  {:<7}  {}  ({})",
            release.id, kind, release.title, year
        );
    }
}

pub fn print_release(release: &Release) {
    let artists: Vec<&str> = release
        .artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect();
    println!("{} - {} (id {})", artists.join(", "), release.title, release.id);
    if let Some(year) = release.year {
        println!("  year:    {}", year);
    }
    if let Some(country) = &release.country {
        println!("  country: {}", country);
    }
    if !release.genres.is_empty() {
        println!("  genres:  {}", release.genres.join(", "));
    }
    if !release.labels.is_empty() {
        for label in &release.labels {
            let catno = label.catno.as_deref().unwrap_or("-");
            println!("  label:   {} ({})", label.name, catno);
        }
    }
    if !release.tracklist.is_empty() {
        println!("  tracklist:");
        for track in &release.tracklist {
            println!("    {:<4} {}  {}", track.position, track.title, track.duration);
        }
    }
}

pub fn print_master(master: &Master) {
    println!("{} (master {})", master.title, master.id);
    if let Some(year) = master.year {
        println!("  year: {}", year);
    }
    if let Some(main_release) = master.main_release {
        println!("  main release: {}", main_release);
    }
    if !master.genres.is_empty() {
        println!("  genres: {}", master.genres.join(", "));
    }
}

pub fn print_master_versions(versions: &MasterVersions) {
    print_page_line(&versions.pagination);
    for version in &versions.versions {
        let released = version.released.as_deref().unwrap_or("----");
        let format = version.format.as_deref().unwrap_or("");
        println!(
            "  {:>10}  {}  [{}]  ({})",
            version.id, version.title, format, released
        );
    }
}

pub fn print_label(label: &Label) {
    println!("{} (id {})", label.name, label.id);
    if let Some(profile) = &label.profile {
        println!("  {}", profile);
    }
    if !label.sublabels.is_empty() {
        let names: Vec<&str> = label
            .sublabels
            .iter()
            .map(|sublabel| sublabel.name.as_str())
            .collect();
        println!("  sublabels: {}", names.join(", "));
    }
}

pub fn print_label_releases(releases: &LabelReleases) {
    print_page_line(&releases.pagination);
    for release in &releases.releases {
        let artist = release.artist.as_deref().unwrap_or("?");
        let year = release
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        println!(
            "  {:>10}  {} - {}  ({})",
            release.id, artist, release.title, year
        );
    }
}

pub fn print_user(user: &User) {
    println!("{} (id {})", user.username, user.id);
    if let Some(name) = &user.name {
        println!("  name:       {}", name);
    }
    if let Some(location) = &user.location {
        println!("  location:   {}", location);
    }
    if let Some(num) = user.num_collection {
        println!("  collection: {}", num);
    }
    if let Some(num) = user.num_wantlist {
        println!("  wantlist:   {}", num);
    }
}

pub fn print_collection(collection: &Collection) {
    print_page_line(&collection.pagination);
    for item in &collection.releases {
        let info = &item.basic_information;
        let artists: Vec<&str> = info.artists.iter().map(|a| a.name.as_str()).collect();
        let year = info
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        println!(
            "  {:>10}  {} - {}  ({})",
            info.id,
            artists.join(", "),
            info.title,
            year
        );
    }
}

pub fn print_wantlist(wantlist: &Wantlist) {
    print_page_line(&wantlist.pagination);
    for want in &wantlist.wants {
        let info = &want.basic_information;
        let artists: Vec<&str> = info.artists.iter().map(|a| a.name.as_str()).collect();
        println!("  {:>10}  {} - {}", info.id, artists.join(", "), info.title);
        if let Some(notes) = &want.notes {
            println!("              {}", notes);
        }
    }
}

pub fn print_status(status: &RateLimiterStatus) {
    println!("requests made:      {}", status.requests_made);
    println!("requests remaining: {}", status.requests_remaining);
    println!("time window:        {:?}", status.time_window);
    println!("window resets in:   {:?}", status.reset_after);
}
