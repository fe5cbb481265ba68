//! Redlink Analysis client: content enhancement.

use crate::client::{ApiClient, Status};
use crate::config::ClientConfig;
use crate::dispatch::{dispatch, ApiResponse, Handlers, RawResponse};
use crate::error::{Error, Result};
use crate::format::{formats, FormatDescriptor};
use crate::payload::Payload;
use crate::request::{RequestBuilder, PARAM_IN, PARAM_OUT};
use tracing::error;

const PATH: &str = "analysis";
const ENHANCE_PATH: &str = "enhance";

#[derive(Debug)]
pub struct RedlinkAnalysis {
    client: ApiClient,
}

impl RedlinkAnalysis {
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self::from_client(ApiClient::new(key)?))
    }

    pub fn with_config(key: &str, config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(ApiClient::with_config(key, config)?))
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn status(&self) -> &Status {
        self.client.status()
    }

    /// Enhance plain text and return the analysis as JSON
    pub fn enhance_text(&self, content: &str) -> Result<ApiResponse> {
        self.enhance(content, &formats::TEXT, &formats::JSON)
    }

    /// Enhance content with the first analysis configured for the key.
    ///
    /// Only a 200 answer is interpreted; any other status is logged and
    /// handed back as [`ApiResponse::Raw`].
    pub fn enhance(
        &self,
        content: impl Into<Payload>,
        input: &FormatDescriptor,
        output: &FormatDescriptor,
    ) -> Result<ApiResponse> {
        let analysis = self.client.status().analyses.first().ok_or(Error::NoAnalysis)?;
        let body = content.into().into_body(input)?;

        let path = RequestBuilder::path(&[PATH, analysis.as_str(), ENHANCE_PATH]);
        let url = self
            .client
            .url(&path, &[(PARAM_IN, input.name), (PARAM_OUT, output.name)]);

        let response = self
            .client
            .post(&url, Some(body), Some(input.mimetype), Some(output.mimetype))?;

        if response.status != 200 {
            error!(
                "Enhance request returned {}: {}",
                response.status, response.reason
            );
            return Ok(ApiResponse::Raw(RawResponse::from(response)));
        }

        dispatch(self.client.registry(), response, Handlers::All)
    }
}
