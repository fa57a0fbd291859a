//! File-based data source.
//!
//! Polls a JSON file containing a channel payload. Useful for viewing
//! captures taken from a node while offline.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use airwatch_types::ChannelDataPayload;

use super::DataSource;

/// A data source that reads channel payloads from a JSON file.
///
/// The file holds one payload in the node's wire format (the body of a
/// `/channel/<n>/latest` response). The source tracks the file's
/// modification time and only returns new data when the file changes.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being monitored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<ChannelDataPayload> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(payload) => {
                    self.last_error = None;
                    Some(payload)
                }
                Err(e) => {
                    self.last_error = Some(format!("Parse error: {}", e));
                    None
                }
            },
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                None
            }
        }
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<ChannelDataPayload> {
        let current_modified = self.get_modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, don't update
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(payload) = self.read_file() {
                self.last_modified = current_modified;
                return Some(payload);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<String> {
        self.last_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "data": [
                {
                    "measurementID": 1,
                    "measurementStartTime": 1000000,
                    "measurementEndTime": 1000010,
                    "measurementDuration": 10.0,
                    "channel": 6,
                    "managementFrameCount": 50,
                    "dataFrameCount": 20,
                    "controlFrameCount": 5
                }
            ]
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/payload.json");
        assert_eq!(source.path(), Path::new("/tmp/payload.json"));
        assert_eq!(source.description(), "file: /tmp/payload.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        // First poll should return data
        let payload = source.poll().unwrap();
        assert_eq!(payload.data.len(), 1);
        assert_eq!(payload.data[0].frame_counts.management_frame_count, 50);
        assert!(payload.station_count_data.is_empty());

        // Second poll without file change should return None
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/payload.json");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }
}
