//! SWAPI client - Film-count enrichment for new planets.
//!
//! The lookup is best effort: a planet SWAPI does not know appears in
//! zero films. Only an unreachable SWAPI or an undecodable reply is an
//! error.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Film-count lookup capability, injected into the planet service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FilmsLookup: Send + Sync {
    /// Number of films the named planet appears in, 0 when unknown
    async fn films_appeared_in(&self, planet_name: &str) -> AppResult<u32>;
}

#[derive(Debug, Deserialize)]
struct SwapiPlanet {
    name: String,
    #[serde(default)]
    films: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SwapiSearchResult {
    #[serde(default)]
    results: Vec<SwapiPlanet>,
}

/// HTTP client for the SWAPI planet search endpoint.
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Create a client with its own connection pool and request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.swapi_url.clone(),
            Duration::from_secs(config.swapi_timeout_secs),
        )
    }
}

#[async_trait]
impl FilmsLookup for SwapiClient {
    async fn films_appeared_in(&self, planet_name: &str) -> AppResult<u32> {
        let query = normalize_name(planet_name);

        let response = self
            .client
            .get(format!("{}/planets/", self.base_url))
            .query(&[("search", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(query = %query, %status, "SWAPI answered with a non-success status");
        }

        // Only an undecodable body is an error; a JSON reply without
        // results (e.g. a throttle notice) counts as no match.
        let result: SwapiSearchResult = response.json().await?;

        let films = result
            .results
            .iter()
            .find(|candidate| normalize_name(&candidate.name) == query)
            .map_or(0, |candidate| candidate.films.len());

        tracing::debug!(
            query = %query,
            candidates = result.results.len(),
            films,
            "SWAPI lookup finished"
        );

        Ok(u32::try_from(films).unwrap_or(u32::MAX))
    }
}

/// Lookup used when enrichment is switched off; every planet gets 0 films.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledFilmsLookup;

#[async_trait]
impl FilmsLookup for DisabledFilmsLookup {
    async fn films_appeared_in(&self, _planet_name: &str) -> AppResult<u32> {
        Ok(0)
    }
}

/// Trim surrounding whitespace and lowercase, so "  Tatooine\n" == "tatooine".
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Tatooine\r\n"), "tatooine");
        assert_eq!(normalize_name("Yavin IV"), "yavin iv");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = SwapiClient::with_client(reqwest::Client::new(), "https://swapi.dev/api/");
        assert_eq!(client.base_url, "https://swapi.dev/api");
    }

    #[tokio::test]
    async fn test_disabled_lookup_returns_zero() {
        let films = DisabledFilmsLookup.films_appeared_in("Tatooine").await.unwrap();
        assert_eq!(films, 0);
    }
}
