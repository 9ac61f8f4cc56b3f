use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::QuoteConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Originator {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub url: String,
    pub language_code: String,
    pub originator: Originator,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("unexpected response code {0}")]
    UnexpectedStatus(u16),

    #[error("quote request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("quote payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the RapidAPI random quote endpoint.
#[derive(Clone)]
pub struct QuoteClient {
    http: Client,
    cfg: QuoteConfig,
}

impl QuoteClient {
    pub fn new(cfg: QuoteConfig) -> Result<Self, QuoteError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self { http, cfg })
    }

    pub async fn random(&self) -> Result<Quote, QuoteError> {
        let url = format!("{}/quotes/random/", self.cfg.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(url)
            .query(&[("language_code", self.cfg.language_code.as_str())])
            .header("X-RapidAPI-Key", &self.cfg.api_key)
            .header("X-RapidAPI-Host", &self.cfg.host)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(QuoteError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
