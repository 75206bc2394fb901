//! The single background unit of work: fetch, parse, hand back.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::http::{create_url, make_http_request, JsonSource};
use crate::parser::extract_feature_from_json;
use crate::something::Something;

/// Fetches the configured URL and extracts the first [`Something`] off the
/// interactive task.
pub struct SomethingTask {
    source: Arc<dyn JsonSource>,
    request_url: String,
}

impl SomethingTask {
    pub fn new(source: Arc<dyn JsonSource>, request_url: impl Into<String>) -> Self {
        Self {
            source,
            request_url: request_url.into(),
        }
    }

    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    /// Run the whole pipeline. Every failure is logged by the step that hit it.
    pub async fn do_in_background(&self) -> Option<Something> {
        let url = create_url(&self.request_url);
        let json_response = make_http_request(self.source.as_ref(), url.as_ref()).await;
        extract_feature_from_json(&json_response)
    }

    /// Spawn [`Self::do_in_background`] onto the runtime.
    pub fn execute(self) -> JoinHandle<Option<Something>> {
        log::info!("Starting fetch of '{}'", self.request_url());
        tokio::spawn(async move { self.do_in_background().await })
    }
}
