//! Build search cluster requests with a fluent API, without a cluster.
//!
//! [`DisconnectedClient`] implements the full [`Client`] capability set, so
//! the builder factories (`prepare_search`, `prepare_get`, ...) work as on
//! any client, but dispatching a request is a no-op that never reports back.
//! The built request can instead be rendered to a method, endpoint and JSON
//! body and sent by whatever HTTP client the caller already has.

pub mod actions;
pub mod builder;
pub mod clients;
pub mod error;
pub mod listeners;
pub mod settings;

pub use actions::{Action, ActionRequest, Method, SortOrder};
pub use builder::RequestBuilder;
pub use clients::{Client, DisconnectedClient};
pub use error::ClientError;
pub use listeners::ActionListener;
pub use settings::{Settings, SettingsBuilder};
