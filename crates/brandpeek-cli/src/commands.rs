//! Command handlers: fetch, rank, render.

use std::io::Write;
use std::time::Duration;

use brandpeek_client::BrandClient;
use brandpeek_core::{
    find_ranked, rank_top_brands, Applied, BrandDetail, BrandFeed, FeedState,
    LOAD_FAILURE_MESSAGE,
};
use tokio::time::MissedTickBehavior;

use crate::render::{render_feed, BrandRenderer};

/// Fetch once and render the ranked list.
///
/// # Errors
///
/// Returns an error if the fetch fails (after rendering the failure message)
/// or the output cannot be written.
pub(crate) async fn run_top(
    client: &BrandClient,
    limit: usize,
    renderer: &dyn BrandRenderer,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut feed = BrandFeed::new(limit);
    let ticket = feed.begin_refresh();
    let outcome = client.fetch_brands().await;
    if let Err(e) = &outcome {
        tracing::error!(error = %e, "failed to load brands");
    }
    feed.complete(ticket, outcome);

    render_feed(renderer, out, feed.state())?;

    if let FeedState::Failed(message) = feed.state() {
        anyhow::bail!("{message}");
    }
    tracing::info!(count = feed.brands().len(), "rendered top brands");
    Ok(())
}

/// Fetch once and render the detail view of one brand from the ranked list.
///
/// # Errors
///
/// Returns an error if the fetch fails, the brand is not in the top `limit`,
/// or the output cannot be written.
pub(crate) async fn run_show(
    client: &BrandClient,
    id: &str,
    limit: usize,
    renderer: &dyn BrandRenderer,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let catalog = match client.fetch_brands().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "failed to load brands");
            renderer.render_error(out, LOAD_FAILURE_MESSAGE)?;
            return Err(e.into());
        }
    };

    let ranked = rank_top_brands(&catalog, limit);
    let Some(brand) = find_ranked(&ranked, id) else {
        anyhow::bail!("brand '{id}' is not in the top {limit}");
    };

    renderer.render_detail(out, &BrandDetail::from_ranked(brand))?;
    Ok(())
}

/// Refresh the ranked list every `interval` until `cycles` loads have
/// completed (or forever when `None`), or until Ctrl-C.
///
/// Only one fetch is outstanding at a time. Ticks that fall due while a fetch
/// is in flight are skipped, and the fetch's own timeout bounds how long a
/// refresh can take, so every refresh ends in a rendered list or failure.
/// Fetch failures are rendered and do not stop the loop.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub(crate) async fn run_watch(
    client: &BrandClient,
    interval: Duration,
    limit: usize,
    cycles: Option<u64>,
    renderer: &dyn BrandRenderer,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut feed = BrandFeed::new(limit);
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately.
    ticker.tick().await;

    let mut completed: u64 = 0;
    loop {
        let ticket = feed.begin_refresh();
        tracing::debug!(generation = ticket.generation(), "refresh started");

        let outcome = tokio::select! {
            outcome = client.fetch_brands() => outcome,
            _ = tokio::signal::ctrl_c() => return Ok(()),
        };

        if let Err(e) = &outcome {
            tracing::warn!(generation = ticket.generation(), error = %e, "refresh failed");
        }
        if feed.complete(ticket, outcome) == Applied::Superseded {
            tracing::info!(generation = ticket.generation(), "stale refresh discarded");
            continue;
        }
        render_feed(renderer, out, feed.state())?;
        out.flush()?;

        completed += 1;
        if cycles.is_some_and(|max| completed >= max) {
            return Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}
