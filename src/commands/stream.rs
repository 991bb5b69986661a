//! Stream command handler.
//!
//! Prints one JSON sample per tick to stdout (for scripting).

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::sync::broadcast;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::core::config::OverlayConfig;
use crate::core::overlay::OverlayController;
use crate::ui::JsonLinesPresenter;

use super::build_sampler;

/// Execute the stream command
///
/// `count` stops the stream after that many samples; `None` runs until Ctrl-C.
pub fn execute(config: &OverlayConfig, count: Option<u64>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to build runtime")?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let ctrlc_tx = shutdown_tx.clone();
    ctrlc::set_handler(move || {
        let _ = ctrlc_tx.send(());
    })
    .context("Failed to set Ctrl-C handler")?;

    let (sampler, description) = build_sampler(config);
    let mut controller = OverlayController::new(
        sampler,
        config.appearance(),
        JsonLinesPresenter::new(io::stdout()),
    );
    controller.start(&description);

    runtime.block_on(stream_samples(
        &mut controller,
        config.sample_interval(),
        count,
        shutdown_rx,
    ))
}

async fn stream_samples(
    controller: &mut OverlayController<JsonLinesPresenter<Stdout>>,
    period: std::time::Duration,
    count: Option<u64>,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<()> {
    if count == Some(0) {
        return Ok(());
    }

    // Wait for CPU measurement interval before the first sample
    tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            tick = ticker.tick() => {
                let now: Instant = tick;
                controller.on_sample_tick(now.into_std());

                if let Some(e) = controller.presenter_mut().take_error() {
                    return Err(e).context("Failed to write sample");
                }

                let written = controller.presenter().written();
                debug!("Sample {} written", written);
                if count.is_some_and(|limit| written >= limit) {
                    break;
                }
            }
            _ = shutdown.recv() => {
                info!("Stream interrupted");
                break;
            }
        }
    }

    Ok(())
}
