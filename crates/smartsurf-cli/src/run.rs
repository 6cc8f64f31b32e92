//! Top-level orchestration: scan the search page, then visit, score, and
//! connect with each discovered profile.
//!
//! Per-profile failures are logged and skipped rather than propagated so a
//! single bad page does not abort the full run. The only hard errors here
//! are failing to bring the browser up and losing the operator handoff.

use std::collections::HashSet;
use std::io::Write;

use anyhow::Context;
use smartsurf_browse::{collect_search_results, BrowsePolicy};
use smartsurf_core::AppConfig;
use smartsurf_profile::{extract_profile_info, is_relevant_profile, send_connect};
use smartsurf_session::{BrowsingSession, CdpSession};

/// Aggregate counts reported at the end of a run.
pub struct RunTotals {
    pub discovered: usize,
    pub visited: usize,
    pub requests_sent: usize,
}

/// Launches the browser, hands control to the operator for login, scans the
/// configured search page, and works through every discovered profile.
///
/// # Errors
///
/// Returns an error when the browser cannot be launched or the operator
/// handoff fails; everything downstream degrades per profile instead.
pub async fn run(config: &AppConfig, attempt_inline: bool) -> anyhow::Result<RunTotals> {
    let session = CdpSession::launch(&config.user_data_dir)
        .await
        .context("failed to launch browser session")?;

    wait_for_operator()?;

    let policy = BrowsePolicy {
        min_mutual_connections: config.min_mutual_connections,
        settle_delay: config.settle_delay(),
    };
    let to_visit =
        collect_search_results(&session, &policy, &config.search_url, attempt_inline).await;
    let discovered = to_visit.len();
    tracing::info!(profiles = discovered, "search scan finished");

    let mut visited: HashSet<String> = HashSet::new();
    let mut requests_sent = 0usize;

    for url in &to_visit {
        if !visited.insert(url.clone()) {
            continue;
        }

        tracing::info!(%url, "visiting profile");
        session.navigate(url).await;
        let profile = extract_profile_info(&session, config.profile_settle()).await;

        if is_relevant_profile(&profile.combined()) {
            tracing::info!(name = %profile.name, "profile is relevant");
            if send_connect(&session).await {
                requests_sent += 1;
                tracing::info!(name = %profile.name, "connection request sent");
            } else {
                tracing::warn!(name = %profile.name, "could not send connection request");
            }
        } else {
            tracing::debug!(name = %profile.name, "profile not relevant");
        }

        // Let the page quiesce before the next navigation.
        session.wait(config.inter_profile_delay()).await;
    }

    let visited_count = visited.len();
    session.shutdown().await;

    Ok(RunTotals {
        discovered,
        visited: visited_count,
        requests_sent,
    })
}

/// Interactive login handoff: the operator signs in inside the browser
/// window, then confirms on stdin.
fn wait_for_operator() -> anyhow::Result<()> {
    print!("Log in to the site in the browser window, then press Enter to start scanning... ");
    std::io::stdout()
        .flush()
        .context("failed to flush prompt")?;
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read operator confirmation")?;
    Ok(())
}
