//! Fetch-then-parse-then-display pipeline for a single JSON entity.
//!
//! The crate issues one HTTP GET against a configured URL, parses the body as a
//! JSON array and turns the `something` field of its first element into a
//! [`Something`]. The result is handed back from a background task to a
//! [`SomethingScreen`], which writes the name into its text view.
//!
//! # Failure model
//!
//! Every failure along the way (malformed URL, transport errors, non-200
//! responses, unparsable payloads, empty arrays) is logged and produces no
//! result. The display is left untouched and nothing is retried.
//!
//! # Modules
//!
//! - **something**: the single-field data holder
//! - **parser**: JSON extraction of the first `something` entry
//! - **http**: URL creation and the reqwest-backed [`JsonSource`]
//! - **task**: the background unit of work
//! - **screen**: text view abstraction and the screen that owns it
//! - **config**: YAML configuration with environment overrides

pub mod config;
pub mod errors;
pub mod http;
pub mod parser;
pub mod screen;
pub mod something;
pub mod task;

pub use config::{AppConfig, ConfigLoader, HttpConfig, LoggingConfig};
pub use errors::{Error, Result};
pub use http::{create_url, make_http_request, HttpJsonSource, JsonSource};
pub use parser::{extract_feature_from_json, parse_something, SOMETHING_FIELD};
pub use screen::{SomethingScreen, TextView, WriterTextView};
pub use something::Something;
pub use task::SomethingTask;

#[cfg(test)]
pub mod test_utils;
