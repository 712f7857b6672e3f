//! Thin HTTP client for the remote catalog/test/user API.
//!
//! The client only fetches and decodes; it performs no retries (retry policy
//! belongs to the backend collaborator) and never stores the auth token —
//! the host layer injects it per call.

use std::env;

use reqwest::Client;

use prep_core::model::{SeriesRecord, UserId};

use crate::error::ApiError;
use crate::feed::{SeriesFeed, TestFeed, UserFeed};
use crate::profile::ProfileOverview;
use crate::quiz::TestRecord;

const DEFAULT_BASE_URL: &str = "https://backend.nurdcells.com/api";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the base URL from `PREP_API_BASE_URL`, falling back to the
    /// production backend.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("PREP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self { base_url }
    }
}

#[derive(Clone)]
pub struct CatalogApi {
    client: Client,
    base_url: String,
}

impl CatalogApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// Fetch the full series catalog with tests and creators populated.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpStatus` for non-success responses,
    /// `ApiError::Http` for transport failures, and `ApiError::Feed` when the
    /// payload fails to decode or validate.
    pub async fn fetch_series(&self) -> Result<Vec<SeriesRecord>, ApiError> {
        let response = self
            .client
            .get(self.url("series"))
            .query(&[("populate", "tests,createdBy")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let items: Vec<SeriesFeed> = response.json().await?;
        let records = items
            .into_iter()
            .map(SeriesFeed::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Fetch the free demo tests with questions populated.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpStatus` for non-success responses,
    /// `ApiError::Http` for transport failures, and `ApiError::Feed` when the
    /// payload fails to decode or validate.
    pub async fn fetch_demo_tests(&self) -> Result<Vec<TestRecord>, ApiError> {
        let response = self
            .client
            .get(self.url("tests/demo"))
            .query(&[("populate", "questions,series")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let items: Vec<TestFeed> = response.json().await?;
        let records = items
            .into_iter()
            .map(TestFeed::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Fetch a user's profile document.
    ///
    /// `token` is the bearer token held by the host layer; it is used for
    /// this request only.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpStatus` for non-success responses (including
    /// auth failures), `ApiError::Http` for transport failures, and
    /// `ApiError::Feed` when the payload fails to decode.
    pub async fn fetch_user(
        &self,
        user_id: &UserId,
        token: &str,
    ) -> Result<ProfileOverview, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("users/{user_id}")))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let feed: UserFeed = response.json().await?;
        Ok(ProfileOverview::from_feed(&feed))
    }
}
