//! Cycle execution and the periodic monitor loop.
//!
//! One cycle is retrieve → normalize → aggregate → emit. The loop
//! alternates Running and Waiting forever; only a shutdown signal ends it.
//! A failed cycle costs that cycle's data, never the process.

use std::time::{Duration, Instant};

use tokio::sync::watch;

use pulsewatch_agent::{normalize_posts, Retriever};
use pulsewatch_analysis::generate_report;
use pulsewatch_core::Report;

/// Per-cycle settings shared by the `report` and `monitor` commands.
#[derive(Debug, Clone)]
pub(crate) struct CycleSettings {
    pub(crate) query: String,
    pub(crate) max_results: usize,
    pub(crate) topic_count: usize,
    pub(crate) json: bool,
}

/// Run one retrieve → normalize → aggregate cycle.
///
/// Never fails: a retrieval error is logged and treated as an empty batch,
/// so every cycle produces a report (possibly with `total_posts = 0`).
pub(crate) async fn run_cycle<R: Retriever>(agent: &R, settings: &CycleSettings) -> Report {
    let raw = match agent
        .retrieve(&settings.query, settings.max_results)
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                query = settings.query.as_str(),
                error = %e,
                "retrieval failed; treating batch as empty"
            );
            Vec::new()
        }
    };

    let retrieved = raw.len();
    let posts = normalize_posts(raw);
    if posts.len() < retrieved {
        tracing::debug!(
            dropped = retrieved - posts.len(),
            "dropped records without usable text"
        );
    }

    generate_report(posts, settings.topic_count)
}

/// Drive cycles until `shutdown` fires.
///
/// The inter-cycle wait is interruptible — shutdown wins immediately, and
/// the biased select means it also wins against an already-elapsed (even
/// zero-length) interval. Cycles that overrun the interval are flagged but
/// never skipped.
pub(crate) async fn run_monitor<R: Retriever>(
    agent: &R,
    settings: &CycleSettings,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    loop {
        let started = Instant::now();
        let report = run_cycle(agent, settings).await;
        crate::render::emit_report(&settings.query, &report, settings.json)?;

        let elapsed = started.elapsed();
        if elapsed > interval {
            tracing::warn!(
                elapsed_secs = elapsed.as_secs(),
                interval_secs = interval.as_secs(),
                "cycle overran the configured interval"
            );
        }
        tracing::info!(secs = interval.as_secs(), "waiting before next cycle");

        tokio::select! {
            biased;
            _ = shutdown.changed() => {
                tracing::info!("shutdown requested; stopping monitor");
                return Ok(());
            }
            () = tokio::time::sleep(interval) => {}
        }
    }
}
