//! Background worker that turns raw click events into durable analytics.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, warn};

use crate::application::services::ClickEnricher;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{ClickCounter, ClickRepository};

/// Consumes click events from the channel until every sender is dropped.
///
/// Each event is enriched and persisted in its own task, gated by a
/// semaphore of `concurrency` permits so a slow analytics store cannot pile
/// up unbounded work. The two writes per event - the durable click row and
/// the volatile counter increment - are issued independently; either can
/// fail without affecting the other, and failures are logged and dropped.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    enricher: Arc<ClickEnricher>,
    clicks: Arc<dyn ClickRepository>,
    counter: Arc<dyn ClickCounter>,
    concurrency: usize,
) {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    while let Some(event) = rx.recv().await {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };

        let enricher = Arc::clone(&enricher);
        let clicks = Arc::clone(&clicks);
        let counter = Arc::clone(&counter);

        tokio::spawn(async move {
            let code = event.code.clone();
            let click = enricher.enrich(event);

            let (appended, incremented) =
                tokio::join!(clicks.append(click), counter.increment(&code));

            if let Err(e) = appended {
                warn!("Failed to append click for {}: {}", code, e);
            }
            if let Err(e) = incremented {
                warn!("Failed to increment counter for {}: {}", code, e);
            }

            drop(permit);
        });
    }

    // Drain in-flight enrichment tasks before returning.
    let _ = semaphore.acquire_many(concurrency.max(1) as u32).await;

    debug!("Click worker channel closed, shutting down");
}
