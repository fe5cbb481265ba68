//! Redlink Data client: datasets, resources, SPARQL and LDPath.

use crate::client::{ApiClient, Status};
use crate::config::ClientConfig;
use crate::dispatch::{dispatch, ApiResponse, Handlers, RawResponse};
use crate::error::{Error, Result};
use crate::format::{formats, FormatDescriptor};
use crate::payload::Payload;
use crate::request::{RequestBuilder, PARAM_URI};
use crate::transport::HttpResponse;
use serde_json::Value;
use tracing::warn;

const PATH: &str = "data";
const RELEASE_PATH: &str = "release";
const RESOURCE_PATH: &str = "resource";
const SPARQL_PATH: &str = "sparql";
const SPARQL_SELECT_PATH: &str = "select";
const SPARQL_UPDATE_PATH: &str = "update";
const LDPATH_PATH: &str = "ldpath";

const SPARQL_QUERY_MIMETYPE: &str = "application/sparql-query";
const SPARQL_UPDATE_MIMETYPE: &str = "application/sparql-update";
const SPARQL_RESULTS_JSON_MIMETYPE: &str = "application/sparql-results+json";

#[derive(Debug)]
pub struct RedlinkData {
    client: ApiClient,
}

impl RedlinkData {
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

    /// Publish the current state of a dataset.
    pub fn release(&self, dataset: &str) -> Result<bool> {
        let url = self.client.url(&RequestBuilder::path(&[PATH, dataset, RELEASE_PATH]), &[]);
        let response = self.client.post(&url, None, None, Some(formats::JSON.mimetype))?;
        Ok(write_outcome("release", &response))
    }

    /// Import RDF data into a dataset.
    ///
    /// `mimetype` selects the payload format; unknown or absent values fall
    /// back to Turtle. With `clean_before` the dataset content is replaced
    /// (PUT), otherwise the data is added to it (POST).
    pub fn import_dataset(
        &self,
        data: impl Into<Payload>,
        mimetype: Option<&str>,
        dataset: &str,
        clean_before: bool,
    ) -> Result<bool> {
        let format = self.rdf_format(mimetype);
        let body = data.into().into_body(format)?;
        let url = self.client.url(&dataset_path(dataset), &[]);
        self.write("import dataset", &url, body, format, clean_before)
    }

    /// Export a whole dataset, as a graph when the answer is parseable RDF.
    pub fn export_dataset(&self, dataset: &str) -> Result<ApiResponse> {
        let url = self.client.url(&dataset_path(dataset), &[]);
        self.read_graph(&url)
    }

    /// Remove every triple from a dataset.
    pub fn clean_dataset(&self, dataset: &str) -> Result<bool> {
        let url = self.client.url(&dataset_path(dataset), &[]);
        let response = self.client.delete(&url, None)?;
        Ok(write_outcome("clean dataset", &response))
    }

    /// Import the triples describing a single resource.
    pub fn import_resource(
        &self,
        uri: &str,
        data: impl Into<Payload>,
        mimetype: Option<&str>,
        dataset: &str,
        clean_before: bool,
    ) -> Result<bool> {
        let format = self.rdf_format(mimetype);
        let body = data.into().into_body(format)?;
        let url = self.client.url(&resource_path(dataset), &[(PARAM_URI, uri)]);
        self.write("import resource", &url, body, format, clean_before)
    }

    pub fn export_resource(&self, uri: &str, dataset: &str) -> Result<ApiResponse> {
        let url = self.client.url(&resource_path(dataset), &[(PARAM_URI, uri)]);
        self.read_graph(&url)
    }

    pub fn delete_resource(&self, uri: &str, dataset: &str) -> Result<bool> {
        let url = self.client.url(&resource_path(dataset), &[(PARAM_URI, uri)]);
        let response = self.client.delete(&url, None)?;
        Ok(write_outcome("delete resource", &response))
    }

    /// Run a SPARQL SELECT/ASK query and return the JSON result document.
    pub fn sparql_tuple_query(&self, query: &str, dataset: &str) -> Result<Value> {
        let url = self.sparql_url(dataset, SPARQL_SELECT_PATH);
        let response = self.client.post(
            &url,
            Some(query.as_bytes().to_vec()),
            Some(SPARQL_QUERY_MIMETYPE),
            Some(SPARQL_RESULTS_JSON_MIMETYPE),
        )?;
        let response = require_success(response)?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Run a SPARQL CONSTRUCT/DESCRIBE query and return the resulting graph.
    pub fn sparql_graph_query(&self, query: &str, dataset: &str) -> Result<ApiResponse> {
        let url = self.sparql_url(dataset, SPARQL_SELECT_PATH);
        let response = self.client.post(
            &url,
            Some(query.as_bytes().to_vec()),
            Some(SPARQL_QUERY_MIMETYPE),
            Some(formats::TURTLE.mimetype),
        )?;
        let response = require_success(response)?;
        dispatch(self.client.registry(), response, Handlers::GraphOnly)
    }

    pub fn sparql_update(&self, query: &str, dataset: &str) -> Result<bool> {
        let url = self.sparql_url(dataset, SPARQL_UPDATE_PATH);
        let response = self.client.post(
            &url,
            Some(query.as_bytes().to_vec()),
            Some(SPARQL_UPDATE_MIMETYPE),
            None,
        )?;
        Ok(write_outcome("sparql update", &response))
    }

    /// Evaluate an LDPath program with `uri` as context.
    ///
    /// Fails with [`Error::RemoteExecution`] when the answer is outside the
    /// 2xx/3xx range. An empty body yields `Value::Null`, as does a 3xx
    /// answer whose body is not JSON.
    pub fn ldpath(&self, uri: &str, program: &str, dataset: &str) -> Result<Value> {
        let path = RequestBuilder::path(&[PATH, dataset, LDPATH_PATH]);
        let url = self.client.url(&path, &[(PARAM_URI, uri)]);
        let response = self.client.post(
            &url,
            Some(program.as_bytes().to_vec()),
            Some(formats::TEXT.mimetype),
            Some(formats::JSON.mimetype),
        )?;
        if !(200..400).contains(&response.status) {
            return Err(Error::RemoteExecution {
                status: response.status,
                reason: response.reason,
            });
        }
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        if response.is_success() {
            return Ok(serde_json::from_slice(&response.body)?);
        }
        match serde_json::from_slice(&response.body) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(
                    "LDPath returned {} {} without a JSON body: {}",
                    response.status, response.reason, e
                );
                Ok(Value::Null)
            }
        }
    }

    fn rdf_format(&self, mimetype: Option<&str>) -> &'static FormatDescriptor {
        match mimetype.and_then(|m| self.client.registry().lookup_by_mimetype(m)) {
            Some(format) => format,
            None => {
                if let Some(m) = mimetype {
                    warn!("Unknown payload mimetype {}, sending as {}", m, formats::TURTLE);
                }
                &formats::TURTLE
            }
        }
    }

    fn write(
        &self,
        operation: &str,
        url: &str,
        body: Vec<u8>,
        format: &FormatDescriptor,
        clean_before: bool,
    ) -> Result<bool> {
        let response = if clean_before {
            self.client.put(url, Some(body), Some(format.mimetype), None)?
        } else {
            self.client.post(url, Some(body), Some(format.mimetype), None)?
        };
        Ok(write_outcome(operation, &response))
    }

    fn read_graph(&self, url: &str) -> Result<ApiResponse> {
        let response = self.client.get(url, Some(formats::TURTLE.mimetype))?;
        if !response.is_success() {
            warn!("Export returned {}: {}", response.status, response.reason);
            return Ok(ApiResponse::Raw(RawResponse::from(response)));
        }
        dispatch(self.client.registry(), response, Handlers::GraphOnly)
    }

    fn sparql_url(&self, dataset: &str, operation: &str) -> String {
        let path = RequestBuilder::path(&[PATH, dataset, SPARQL_PATH, operation]);
        self.client.url(&path, &[])
    }
}

fn dataset_path(dataset: &str) -> String {
    RequestBuilder::path(&[PATH, dataset])
}

fn resource_path(dataset: &str) -> String {
    RequestBuilder::path(&[PATH, dataset, RESOURCE_PATH])
}

// Write operations only report success; the status is logged so a `false`
// can still be traced back to the server's answer.
fn write_outcome(operation: &str, response: &HttpResponse) -> bool {
    if response.is_success() {
        true
    } else {
        warn!(
            "{} rejected with {}: {}",
            operation, response.status, response.reason
        );
        false
    }
}

fn require_success(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(Error::RemoteExecution {
            status: response.status,
            reason: response.reason,
        })
    }
}
