//! Channel-based data source.
//!
//! Receives channel payloads via a tokio watch channel. Useful for
//! embedding the viewer behind a custom collector that pushes payloads
//! rather than having the viewer poll for them.

use tokio::sync::watch;

use airwatch_types::ChannelDataPayload;

use super::DataSource;

/// A data source that receives payloads via a watch channel.
///
/// The channel holds only the most recent payload: if the producer sends
/// twice between polls, the earlier payload is never observed. That makes
/// "latest response wins" an explicit property of this source.
///
/// # Example
///
/// ```
/// use airwatch_tui::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("collector");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<ChannelDataPayload>,
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source from a watch receiver.
    pub fn new(receiver: watch::Receiver<ChannelDataPayload>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair for pushing payloads to a ChannelSource.
    ///
    /// Returns (sender, source); the sender side pushes payloads and the
    /// source side plugs into the viewer.
    pub fn create(source_description: &str) -> (watch::Sender<ChannelDataPayload>, Self) {
        let (tx, rx) = watch::channel(ChannelDataPayload::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<ChannelDataPayload> {
        // Return the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

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
        // Errors are the producer's concern; the channel itself cannot fail.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwatch_types::MeasurementRecord;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially returns the default (empty) payload
        let payload = source.poll();
        assert!(payload.is_some());
        assert!(payload.unwrap().is_empty());

        // No change, so poll returns None
        assert!(source.poll().is_none());

        // Send a new payload
        let payload = ChannelDataPayload {
            data: vec![MeasurementRecord::default()],
            station_count_data: Vec::new(),
        };
        tx.send(payload).unwrap();

        let received = source.poll().unwrap();
        assert_eq!(received.data.len(), 1);
    }

    #[test]
    fn test_channel_source_latest_wins() {
        let (tx, mut source) = ChannelSource::create("test");
        let _ = source.poll();

        // Two sends between polls: only the later payload is observable.
        tx.send(ChannelDataPayload {
            data: vec![MeasurementRecord::default()],
            station_count_data: Vec::new(),
        })
        .unwrap();
        tx.send(ChannelDataPayload {
            data: vec![MeasurementRecord::default(), MeasurementRecord::default()],
            station_count_data: Vec::new(),
        })
        .unwrap();

        let received = source.poll().unwrap();
        assert_eq!(received.data.len(), 2);
        assert!(source.poll().is_none());
    }
}
