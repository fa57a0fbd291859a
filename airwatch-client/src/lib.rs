//! # airwatch-client
//!
//! HTTP client for the survey node channel measurement API.
//!
//! A survey node exposes the latest measurements for a channel as JSON at
//! `/api/1.0/channel/<n>/latest`, optionally bounded with a `limit` query
//! parameter. This crate wraps that endpoint behind [`NodeClient`], returning
//! typed [`ChannelDataPayload`](airwatch_types::ChannelDataPayload) values
//! and classifying failures into [`ClientError`] kinds instead of letting
//! them propagate untyped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use airwatch_client::NodeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NodeClient::builder()
//!         .endpoint("http://node.local:8080")
//!         .build();
//!
//!     let payload = client.latest_channel_data(6, Some(250)).await?;
//!     println!("{} measurements", payload.data.len());
//!
//!     Ok(())
//! }
//! ```

mod error;
mod node;

pub use error::ClientError;
pub use node::{NodeClient, NodeClientBuilder, DEFAULT_CHART_LIMIT};
