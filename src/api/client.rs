//! Async PokeAPI client
//!
//! Thin wrapper over reqwest that builds endpoint URLs from the configured
//! base and decodes JSON records. No retries and no caching: every call is a
//! single GET.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::ApiError;
use super::types::{CatalogPage, EvolutionChainRecord, PokemonRecord, SpeciesRecord, TypeRecord};

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// PokeAPI client
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    /// Create a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch every catalog name in listing order with a single page request
    pub async fn fetch_catalog(&self, limit: u32) -> Result<Vec<String>, ApiError> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let page: CatalogPage = self.get_json(url).await?;
        Ok(page.results.into_iter().map(|r| r.name).collect())
    }

    /// Fetch the primary record for a name or national dex number
    ///
    /// Any non-success status is reported as `ApiError::NotFound`.
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<PokemonRecord, ApiError> {
        let url = self.endpoint(&["pokemon", name_or_id])?;
        match self.get_json(url).await {
            Err(ApiError::Status { .. }) => Err(ApiError::NotFound(name_or_id.to_string())),
            other => other,
        }
    }

    /// Fetch a species record from the URL embedded in a primary record
    pub async fn fetch_species(&self, species_url: &str) -> Result<SpeciesRecord, ApiError> {
        let url = self.resolve(species_url)?;
        self.get_json(url).await
    }

    /// Fetch damage relations for a type name
    pub async fn fetch_type(&self, type_name: &str) -> Result<TypeRecord, ApiError> {
        let url = self.endpoint(&["type", type_name])?;
        self.get_json(url).await
    }

    /// Fetch an evolution chain from the URL embedded in a species record
    pub async fn fetch_evolution_chain(
        &self,
        chain_url: &str,
    ) -> Result<EvolutionChainRecord, ApiError> {
        let url = self.resolve(chain_url)?;
        self.get_json(url).await
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Resource URLs from PokeAPI are absolute; relative ones resolve against the base
    fn resolve(&self, resource_url: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(resource_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", resource_url, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        log::debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("GET {} returned {}", url, status);
            return Err(ApiError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
