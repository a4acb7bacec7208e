//! Blocking HTTP client for the NetProfiler reporting API

use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::netprofiler::model::{CentricityInfo, Column, GroupBy, Realm};
use crate::netprofiler::{Centricity, ReportingApi};

const REPORTING_PATH: &str = "api/profiler/1.0/reporting";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to find the appliance and how to log in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: Url,
    pub username: String,
    pub password: String,
}

impl Endpoint {
    /// Build an endpoint from a host name, address or base URL.
    ///
    /// A bare host is reached over https. `port` replaces whatever port the
    /// host carried.
    pub fn new(
        host: &str,
        port: Option<u16>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ApiResult<Self> {
        let host = host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(ApiError::InvalidHost(host.to_string()));
        }

        let raw = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };

        let mut base_url = Url::parse(&raw).map_err(|_| ApiError::InvalidHost(host.to_string()))?;
        if base_url.host_str().is_none() {
            return Err(ApiError::InvalidHost(host.to_string()));
        }
        // join() drops the last path segment unless it ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        if let Some(port) = port {
            base_url
                .set_port(Some(port))
                .map_err(|_| ApiError::InvalidHost(host.to_string()))?;
        }

        Ok(Endpoint {
            base_url,
            username: username.into(),
            password: password.into(),
        })
    }

    /// Full URL of a reporting resource
    fn reporting_url(&self, resource: &str) -> ApiResult<Url> {
        self.base_url
            .join(&format!("{}/{}", REPORTING_PATH, resource))
            .map_err(|_| ApiError::InvalidHost(self.base_url.to_string()))
    }
}

/// Builder for [`NetProfilerClient`]
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    timeout: Duration,
    accept_invalid_certs: bool,
}

impl ClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Appliances commonly ship with self-signed certificates
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self, endpoint: Endpoint) -> ApiResult<NetProfilerClient> {
        let client = HttpClient::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()?;

        Ok(NetProfilerClient { endpoint, client })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        ClientBuilder {
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

/// Client for one NetProfiler appliance
#[derive(Debug, Clone)]
pub struct NetProfilerClient {
    endpoint: Endpoint,
    client: HttpClient,
}

impl NetProfilerClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// GET a reporting resource and decode its JSON body
    fn get<T>(&self, resource: &str, query: &[(&str, &str)]) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let mut url = self.endpoint.reporting_url(resource)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        let url_str = url.to_string();
        debug!("GET {}", url_str);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(USER_AGENT, HeaderValue::from_static(concat!("npcolumns/", env!("CARGO_PKG_VERSION"))))
            .basic_auth(&self.endpoint.username, Some(&self.endpoint.password))
            .send()
            .map_err(|e| ApiError::Network {
                url: url_str.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| ApiError::Network {
            url: url_str.clone(),
            source: e,
        })?;
        debug!("RX {} {}", status, truncate(&body, 1500));

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Authentication {
                url: url_str,
                status,
            });
        }
        if !status.is_success() {
            return Err(ApiError::Http {
                url: url_str,
                status,
                body: truncate(&body, 200).to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            url: url_str,
            body: truncate(&body, 200).to_string(),
            source: e,
        })
    }
}

impl ReportingApi for NetProfilerClient {
    fn columns(&self, realm: &str, centricity: Centricity, groupby: &str) -> ApiResult<Vec<Column>> {
        self.get(
            "columns.json",
            &[
                ("realm", realm),
                ("centricity", centricity.code()),
                ("group_by", groupby),
            ],
        )
    }

    fn group_bys(&self) -> ApiResult<Vec<GroupBy>> {
        self.get("group_bys.json", &[])
    }

    fn realms(&self) -> ApiResult<Vec<Realm>> {
        self.get("realms.json", &[])
    }

    fn centricities(&self) -> ApiResult<Vec<CentricityInfo>> {
        self.get("centricities.json", &[])
    }
}

fn truncate(s: &str, len: usize) -> &str {
    if s.len() <= len {
        return s;
    }
    let mut end = len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
