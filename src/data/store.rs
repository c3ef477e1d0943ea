use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;

use crate::data::endpoint::{Endpoint, SampleCount};
use crate::data::error::ApiError;

/// A sample's values as returned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub values: Vec<f64>,
    pub captured_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct NamesBody {
    samples: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SampleBody {
    #[serde(default)]
    data: Vec<f64>,
    /// Epoch milliseconds.
    #[serde(default)]
    timestamp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Remote sample store operations. Implemented over HTTP for the app and by an
/// in-memory fake in tests.
pub trait SampleStore: Send + Sync {
    fn list_names(&self) -> Result<Vec<String>, ApiError>;
    fn fetch_sample(&self, name: &str) -> Result<Measurement, ApiError>;
    fn create_sample(&self, name: &str, count: SampleCount) -> Result<(), ApiError>;
    fn rename_sample(&self, old_name: &str, new_name: &str) -> Result<(), ApiError>;
    fn delete_sample(&self, name: &str) -> Result<(), ApiError>;
}

/// Blocking HTTP client for the sample store. Requests are issued from worker
/// threads, never from the UI thread.
pub struct HttpSampleStore {
    client: Client,
    endpoint: Endpoint,
}

impl HttpSampleStore {
    pub fn new(endpoint: Endpoint) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self { client, endpoint })
    }

    fn send(&self, request: RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok((status, body))
    }
}

impl SampleStore for HttpSampleStore {
    fn list_names(&self) -> Result<Vec<String>, ApiError> {
        let (status, body) = self.send(self.client.get(self.endpoint.list()))?;
        decode_names(status, &body)
    }

    fn fetch_sample(&self, name: &str) -> Result<Measurement, ApiError> {
        let (status, body) = self.send(self.client.get(self.endpoint.sample(name)))?;
        decode_sample(status, &body)
    }

    fn create_sample(&self, name: &str, count: SampleCount) -> Result<(), ApiError> {
        let (status, body) = self.send(self.client.post(self.endpoint.create(name, count)))?;
        decode_mutation(status, &body)
    }

    fn rename_sample(&self, old_name: &str, new_name: &str) -> Result<(), ApiError> {
        let (status, body) =
            self.send(self.client.put(self.endpoint.rename(old_name, new_name)))?;
        decode_mutation(status, &body)
    }

    fn delete_sample(&self, name: &str) -> Result<(), ApiError> {
        let (status, body) = self.send(self.client.delete(self.endpoint.delete(name)))?;
        decode_mutation(status, &body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build the rejection for a non-success status, picking up `error` from the
/// body when it has one.
fn rejection(status: u16, body: &serde_json::Value) -> ApiError {
    let message = serde_json::from_value::<ErrorBody>(body.clone())
        .ok()
        .and_then(|b| b.error);
    ApiError::Rejected { status, message }
}

fn decode_names(status: u16, body: &str) -> Result<Vec<String>, ApiError> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    if !is_success(status) {
        return Err(rejection(status, &json));
    }
    let names: NamesBody = serde_json::from_value(json)?;
    Ok(names.samples)
}

fn decode_sample(status: u16, body: &str) -> Result<Measurement, ApiError> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    if !is_success(status) {
        return Err(rejection(status, &json));
    }
    let sample: SampleBody = serde_json::from_value(json)?;
    let captured_at = sample
        .timestamp
        .and_then(|ms| DateTime::<Utc>::from_timestamp_millis(ms as i64));
    Ok(Measurement { values: sample.data, captured_at })
}

/// Mutations succeed or fail on status alone, but the body must still be JSON.
fn decode_mutation(status: u16, body: &str) -> Result<(), ApiError> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    if is_success(status) {
        Ok(())
    } else {
        Err(rejection(status, &json))
    }
}
