//! Async backend client using reqwest

use std::collections::BTreeMap;

use reqwest::multipart;
use reqwest::Method;
use url::Url;

use teavision_domain::{Account, ImageKind, ModelKind, PredictionOutcome};

use crate::config::ClientConfig;
use crate::endpoint::{EndpointPool, Served};
use crate::error::{ClientError, ClientResult};
use crate::wire;
use crate::wire::{
    AuthReply, ChatReply, ChatRequest, CredentialsRequest, HealthReply, PolyphenolPrediction,
    PolyphenolRequest, PolyphenolSample, PredictionReply, RegionGroupReply, RegionGroupRequest,
    RegionGroupResult, RgbAnalysisReply, UsageSummary,
};

pub struct TeaVisionClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl TeaVisionClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.config
            .base_url
            .join(path)
            .map_err(|_| ClientError::InvalidUrl {
                url: format!("{}{path}", self.config.base_url),
            })
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, url)
            .header("User-Agent", &self.config.user_agent);
        if let Some(email) = &self.config.identity_email {
            builder = builder.header("X-User-Email", email);
        }
        builder
    }

    /// Send a request and return the body of a 2xx reply.
    async fn send(builder: reqwest::RequestBuilder) -> ClientResult<String> {
        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::RequestFailed {
                message: e.to_string(),
            })?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: wire::failure_message(&body),
            });
        }

        Ok(body)
    }

    /// Backend liveness probe.
    pub async fn health(&self) -> ClientResult<HealthReply> {
        let url = self.endpoint("/health")?;
        let body = Self::send(self.request(Method::GET, url)).await?;
        wire::decode_reply(&body)
    }

    fn predict_url(&self, model: ModelKind, image_kind: ImageKind) -> ClientResult<Url> {
        let mut url = self.endpoint("/predict")?;
        url.query_pairs_mut()
            .append_pair("model", model.api_name())
            .append_pair("type", image_kind.api_name());
        Ok(url)
    }

    /// Classify one uploaded image.
    pub async fn predict(
        &self,
        image: Vec<u8>,
        file_name: &str,
        model: ModelKind,
        image_kind: ImageKind,
    ) -> ClientResult<PredictionOutcome> {
        let url = self.predict_url(model, image_kind)?;
        let part = multipart::Part::bytes(image).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let body = Self::send(self.request(Method::POST, url).multipart(form)).await?;
        let reply: PredictionReply = wire::decode_reply(&body)?;
        Ok(reply.into_outcome(model, image_kind))
    }

    /// Crop an uploaded image server-side and return its RGB channel means.
    pub async fn analyze_rgb(
        &self,
        image: Vec<u8>,
        file_name: &str,
    ) -> ClientResult<RgbAnalysisReply> {
        let url = self.endpoint("/analyze_rgb")?;
        let part = multipart::Part::bytes(image).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let body = Self::send(self.request(Method::POST, url).multipart(form)).await?;
        wire::decode_reply(&body)
    }

    /// Predict region and elevation group from handcrafted feature rows.
    ///
    /// Each row maps feature column names to values; the backend fills
    /// missing columns with zero. The model is selected via the
    /// `X-Model-Name` header and must be one of the classical models.
    pub async fn predict_region_group(
        &self,
        model: ModelKind,
        rows: &[BTreeMap<String, f64>],
    ) -> ClientResult<Vec<RegionGroupResult>> {
        let url = self.endpoint("/predict_region_group")?;
        let request = RegionGroupRequest { rows };

        let builder = self
            .request(Method::POST, url)
            .header("X-Model-Name", model.api_name())
            .json(&request);
        let body = Self::send(builder).await?;
        let reply: RegionGroupReply = wire::decode_reply(&body)?;
        Ok(reply.results)
    }

    /// Predict tea region from polyphenol measurements, trying each pool
    /// endpoint in order until one answers.
    ///
    /// Unreachable backends and non-success statuses advance to the next
    /// endpoint; once a backend answers 2xx it is pinned in the pool and
    /// decode failures surface directly.
    pub async fn predict_polyphenol(
        &self,
        pool: &mut EndpointPool,
        samples: &[PolyphenolSample],
    ) -> ClientResult<Served<Vec<PolyphenolPrediction>>> {
        let request = PolyphenolRequest { data: samples };
        let mut attempts = 0usize;

        for index in 0..pool.len() {
            let base = pool.endpoints()[index].clone();
            let url = base
                .join("/predict_polyphenol_region")
                .map_err(|_| ClientError::InvalidUrl {
                    url: base.to_string(),
                })?;
            attempts += 1;

            let response = match self.request(Method::POST, url).json(&request).send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!("Backend {} unreachable: {}", base, e);
                    continue;
                }
            };

            if !response.status().is_success() {
                tracing::warn!(
                    "Backend {} returned HTTP {}",
                    base,
                    response.status().as_u16()
                );
                continue;
            }

            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Backend {} reply unreadable: {}", base, e);
                    continue;
                }
            };

            let value = wire::decode_reply(&body)?;
            pool.mark_good(index);
            return Ok(Served {
                endpoint: base,
                value,
            });
        }

        Err(ClientError::AllEndpointsFailed { attempts })
    }

    /// Relay a chatbot message and return the assistant's reply text.
    pub async fn chat(&self, message: &str) -> ClientResult<String> {
        let url = self.endpoint("/api/chatbot")?;
        let body =
            Self::send(self.request(Method::POST, url).json(&ChatRequest { message })).await?;
        let reply: ChatReply = wire::decode_reply(&body)?;
        Ok(reply.response)
    }

    /// Fetch platform usage statistics. Requires an admin email, which is
    /// sent as the `X-Admin-Email` header.
    pub async fn usage_summary(&self, admin_email: &str) -> ClientResult<UsageSummary> {
        let url = self.endpoint("/api/admin/stats")?;
        let builder = self
            .request(Method::GET, url)
            .header("X-Admin-Email", admin_email);
        let body = Self::send(builder).await?;
        wire::decode_reply(&body)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Account> {
        self.authenticate("/login", email, password).await
    }

    pub async fn register(&self, email: &str, password: &str) -> ClientResult<Account> {
        self.authenticate("/register", email, password).await
    }

    async fn authenticate(&self, path: &str, email: &str, password: &str) -> ClientResult<Account> {
        let url = self.endpoint(path)?;
        let request = CredentialsRequest { email, password };
        let body = Self::send(self.request(Method::POST, url).json(&request)).await?;
        let reply: AuthReply = wire::decode_reply(&body)?;
        Ok(reply.user.into_account())
    }
}
