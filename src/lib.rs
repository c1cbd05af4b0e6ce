//! Client SDK for a Directus-style content management API.
//!
//! Provides collection-scoped operations — item CRUD, revision history,
//! and revert — over an injected HTTP transport.
//!
//! # Architecture
//!
//! - **Routing**: maps a collection name to its endpoint. User collections
//!   live under `/items/<collection>`; reserved `directus_*` system
//!   collections under their own namespace (`directus_users` → `/users`).
//! - **Transport**: a capability interface of five HTTP verbs returning
//!   parsed JSON bodies. A `reqwest`-backed implementation is provided;
//!   tests substitute a mock.
//! - **Client**: validates arguments, resolves the path, dispatches
//!   exactly one transport call, and unwraps the `data` envelope.
//!
//! The client is stateless between calls: concurrent invocations are
//! independent, and failures of one call never affect another.
//!
//! # Example
//!
//! ```
//! use directus_client::{Client, ClientConfig};
//!
//! let config = ClientConfig::new("https://demo-api.example.com");
//! let client = Client::new(config);
//! ```

mod client;
mod config;
mod error;
mod http;
pub mod routing;
pub mod transport;
mod types;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpTransport;
pub use routing::{collection_endpoint, SYSTEM_COLLECTION_PREFIX};
pub use transport::Transport;
pub use types::{PrimaryKey, QueryParams, ResponseEnvelope, Revision};
