//! Command handlers for the CLI.
//!
//! Each handler builds a `PlacesClient` from config. Search pages never fail
//! outright; an upstream failure prints as an empty page plus a warning.

use placescout_core::{AppConfig, ListingDetail, RankingPolicy};
use placescout_places::{ExploreView, Explorer, Navigation, PageStatus, PlacesClient};

const NAME_WIDTH: usize = 32;

pub(crate) struct SearchRequest<'a> {
    pub keyword: &'a str,
    pub refine: Option<&'a str>,
    pub city: &'a str,
    pub country: &'a str,
    pub ranking: RankingPolicy,
    pub pages: u32,
    pub json: bool,
}

fn build_client(config: &AppConfig) -> anyhow::Result<PlacesClient> {
    PlacesClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))
}

/// Submit a search and walk forward up to `request.pages` pages, printing
/// each one as it lands.
///
/// # Errors
///
/// Returns an error if the keyword is empty or the client cannot be built.
/// Page-fetch failures are printed, not propagated.
pub(crate) async fn run_search(
    config: &AppConfig,
    request: &SearchRequest<'_>,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let explorer = Explorer::with_ranking(client, request.ranking);

    explorer
        .submit(request.country, request.city, request.keyword, request.refine)
        .await?;

    if let Some(state) = explorer.pagination().await {
        tracing::info!(
            query = %state.query().text_query(),
            ranking = %request.ranking,
            "search submitted"
        );
    }

    let mut view = explorer.view().await;
    print_page(&view, request.json)?;

    for _ in 1..request.pages {
        if !view.has_next_page {
            break;
        }
        if explorer.go_next().await != Navigation::Displayed {
            break;
        }
        view = explorer.view().await;
        print_page(&view, request.json)?;
    }

    if !request.json && view.has_next_page {
        println!("more results available; rerun with a higher --pages");
    }

    Ok(())
}

fn print_page(view: &ExploreView, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(view)?);
        return Ok(());
    }

    println!();
    println!("Page {} (sorted by {})", view.page_number, view.ranking);

    match &view.status {
        Some(PageStatus::Failed { reason }) => {
            eprintln!("warning: search failed: {reason}");
        }
        Some(PageStatus::Unsettled { status }) => {
            eprintln!("warning: provider returned status {status}");
        }
        _ => {}
    }

    if view.results.is_empty() {
        println!("no results");
        return Ok(());
    }

    let header = format!(
        "{:<34}{:<20}{:<8}{:<20}ADDRESS",
        "NAME", "PHONE", "RATING", "TYPE"
    );
    println!("{header}");
    for listing in &view.results {
        print_row(listing);
    }

    Ok(())
}

fn print_row(listing: &ListingDetail) {
    let name = if listing.name.chars().count() > NAME_WIDTH {
        format!(
            "{}...",
            listing.name.chars().take(NAME_WIDTH - 3).collect::<String>()
        )
    } else {
        listing.name.clone()
    };
    let rating = match (listing.rating, listing.rating_count) {
        (Some(r), Some(n)) => format!("{r:.1}({n})"),
        (Some(r), None) => format!("{r:.1}"),
        _ => "-".to_owned(),
    };
    println!(
        "{:<34}{:<20}{:<8}{:<20}{}",
        name,
        listing.phone.as_deref().unwrap_or("-"),
        rating,
        listing.primary_type_label().unwrap_or_else(|| "-".to_owned()),
        listing.address
    );
}

/// Print country suggestions for `input`.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the autocomplete call
/// fails.
pub(crate) async fn run_countries(config: &AppConfig, input: &str) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let countries = client.autocomplete_countries(input).await?;

    if countries.is_empty() {
        println!("no countries match '{input}'");
        return Ok(());
    }
    for country in &countries {
        println!("{}", country.description);
    }
    Ok(())
}

/// Print the image URL for `photo_ref`, or `(no photo)`.
///
/// # Errors
///
/// Returns an error if the client cannot be built.
pub(crate) fn run_photo_url(
    config: &AppConfig,
    photo_ref: &str,
    width: Option<u32>,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let url = client.photo_url(
        Some(photo_ref).filter(|r| !r.trim().is_empty()),
        width.unwrap_or(config.photo_max_width),
    );
    println!("{}", url.as_deref().unwrap_or("(no photo)"));
    Ok(())
}
