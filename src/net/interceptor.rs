//! Request/response adapters applied to every call the `ApiService` makes.

use super::NetError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Headers attached to every request, installed as client defaults.
pub struct CommonHeadersInterceptor;

impl CommonHeadersInterceptor {
    pub fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, NetError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| NetError::Header {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| NetError::Header {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

/// Query parameters appended to every request.
#[derive(Debug, Clone, Default)]
pub struct CommonParamsInterceptor {
    params: Vec<(String, String)>,
}

impl CommonParamsInterceptor {
    pub fn new(params: &BTreeMap<String, String>) -> Self {
        Self {
            params: params
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        if self.params.is_empty() {
            request
        } else {
            request.query(&self.params)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HttpLoggingInterceptor {
    log_bodies: bool,
}

impl HttpLoggingInterceptor {
    pub fn new(log_bodies: bool) -> Self {
        Self { log_bodies }
    }

    pub fn on_request(&self, method: &Method, url: &Url) {
        debug!("--> {} {}", method, url);
    }

    pub fn on_response(&self, url: &Url, status: StatusCode, elapsed: Duration, body: &str) {
        debug!(
            "<-- {} {} ({}ms, {} bytes)",
            status.as_u16(),
            url,
            elapsed.as_millis(),
            body.len()
        );
        if self.log_bodies {
            trace!("{}", body);
        }
    }
}
