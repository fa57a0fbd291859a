//! HTTP polling data source.
//!
//! Fetches channel payloads from a survey node on an interval, in a
//! background tokio task, and hands them to the UI through a watch channel.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use airwatch_client::NodeClient;
use airwatch_types::ChannelDataPayload;

use super::DataSource;

/// A data source that polls a node's measurement API.
///
/// A background task fetches `/channel/<n>/latest` every `refresh` and
/// publishes each completed payload into a watch channel. The channel
/// keeps only the most recent payload, so if one fetch is still in flight
/// when the next completes, the UI always observes the latest completed
/// response and never a stale one after it. In-flight requests are not
/// cancelled.
///
/// Must be created from within a tokio runtime.
#[derive(Debug)]
pub struct HttpSource {
    receiver: watch::Receiver<ChannelDataPayload>,
    description: String,
    last_error: Arc<Mutex<Option<String>>>,
}

impl HttpSource {
    /// Spawn the background fetch loop for a channel.
    ///
    /// `limit` bounds each request's result set (request shaping; the
    /// transform itself never truncates).
    pub fn spawn(client: NodeClient, channel: u32, limit: Option<u32>, refresh: Duration) -> Self {
        let (tx, rx) = watch::channel(ChannelDataPayload::default());
        let last_error = Arc::new(Mutex::new(None));
        let error_handle = last_error.clone();
        let description = format!("node: {} channel {}", client.endpoint(), channel);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(refresh);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                match client.latest_channel_data(channel, limit).await {
                    Ok(payload) => {
                        debug!(
                            channel,
                            measurements = payload.data.len(),
                            station_counts = payload.station_count_data.len(),
                            "fetched channel payload"
                        );
                        *error_handle.lock().unwrap() = None;
                        if tx.send(payload).is_err() {
                            // Receiver dropped, viewer is gone
                            break;
                        }
                    }
                    Err(e) => {
                        *error_handle.lock().unwrap() = Some(e.to_string());
                    }
                }
            }
        });

        Self {
            receiver: rx,
            description,
            last_error,
        }
    }
}

impl DataSource for HttpSource {
    fn poll(&mut self) -> Option<ChannelDataPayload> {
        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<String> {
        self.last_error.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_source_description() {
        let client = NodeClient::builder()
            .endpoint("http://127.0.0.1:9")
            .build();
        let source = HttpSource::spawn(client, 6, Some(250), Duration::from_secs(60));
        assert_eq!(source.description(), "node: http://127.0.0.1:9 channel 6");
    }

    #[tokio::test]
    async fn test_http_source_reports_fetch_error() {
        // Port 9 (discard) is not serving HTTP; the first fetch must fail
        // and the failure must surface through error().
        let client = NodeClient::builder()
            .endpoint("http://127.0.0.1:9")
            .timeout(Duration::from_millis(250))
            .build();
        let mut source = HttpSource::spawn(client, 1, None, Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(source.poll().is_none());
        assert!(source.error().is_some());
    }
}
