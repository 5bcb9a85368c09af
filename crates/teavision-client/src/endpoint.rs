//! Backend endpoint pool with ordered failover
//!
//! The polyphenol predictor can run against several deployments (a LAN
//! instance plus a hosted fallback). Requests always try the endpoints in
//! the order they were configured; the pool only remembers which one
//! answered last so callers can display it.

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Ordered list of backend base URLs.
#[derive(Clone, Debug)]
pub struct EndpointPool {
    endpoints: Vec<Url>,
    last_good: Option<usize>,
}

impl EndpointPool {
    /// Build a pool from base URLs. Every URL must parse and use http(s).
    pub fn new<I, S>(urls: I) -> ClientResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut endpoints = Vec::new();
        for url in urls {
            let parsed = Url::parse(url.as_ref()).map_err(|_| ClientError::InvalidUrl {
                url: url.as_ref().to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ClientError::InvalidUrl {
                    url: url.as_ref().to_string(),
                });
            }
            endpoints.push(parsed);
        }
        Ok(Self {
            endpoints,
            last_good: None,
        })
    }

    /// Pool containing a single backend.
    pub fn single(url: Url) -> Self {
        Self {
            endpoints: vec![url],
            last_good: None,
        }
    }

    pub fn endpoints(&self) -> &[Url] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// The endpoint that served the most recent successful request.
    pub fn last_good(&self) -> Option<&Url> {
        self.last_good.and_then(|i| self.endpoints.get(i))
    }

    pub(crate) fn mark_good(&mut self, index: usize) {
        if index < self.endpoints.len() {
            self.last_good = Some(index);
        }
    }
}

/// A reply together with the endpoint that produced it.
#[derive(Clone, Debug)]
pub struct Served<T> {
    pub endpoint: Url,
    pub value: T,
}
