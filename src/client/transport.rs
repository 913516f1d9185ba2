use crate::{
    client::model::{ErrorBody, QueryRequest, QueryResponse},
    core::config::GeoQueryConfig,
    Error, Result,
};
use async_trait::async_trait;

/// One round trip to the query endpoint
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Sends the query. Any non-2xx status is an error; there is no retry.
    async fn send(&self, request: &QueryRequest) -> Result<QueryResponse>;
}

/// `POST {endpoint}/process_query` over reqwest
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &GeoQueryConfig) -> Self {
        Self::new(config.query_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QueryTransport for HttpTransport {
    async fn send(&self, request: &QueryRequest) -> Result<QueryResponse> {
        log::debug!("POST {} ({} chars)", self.url, request.query.len());
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(Error::from)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
                .map(|body| body.error);
            return Err(Box::new(Error::Status {
                status: status.as_u16(),
                detail,
            }));
        }

        let body = response.bytes().await.map_err(Error::from)?;
        let parsed: QueryResponse = serde_json::from_slice(&body).map_err(Error::from)?;
        log::debug!(
            "response: {} explicit, {} implicit, {} markers",
            parsed.explicit_locations.len(),
            parsed.implicit_locations.len(),
            parsed.map_data.markers.len()
        );
        Ok(parsed)
    }
}
