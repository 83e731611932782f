//! Synchronous client for the **PokeAPI (v2)** REST service.
//!
//! Each call issues exactly one GET and returns the decoded JSON body or a
//! [`FetchError`]. There is no retry and no caching: the tool is one-shot and
//! interactive, so a failure is reported straight back to the user.
//!
//! ### Notes
//! - Identifiers (names or numeric ids) are trimmed, lower-cased and
//!   percent-encoded as one path segment. Digits pass through untouched, so
//!   `"25"` and `"pikachu"` map to `/pokemon/25` and `/pokemon/pikachu`.
//! - The whole request (connect + body) is bounded by the client timeout,
//!   10 seconds unless configured otherwise.
//!
//! Typical usage:
//! ```no_run
//! # use pokeinfo::{Client, summary};
//! let client = Client::default();
//! let value = client.fetch_pokemon("pikachu")?;
//! let record = pokeinfo::api::parse_record(&value)?;
//! println!("{}", summary::summarize(&record));
//! # Ok::<(), pokeinfo::FetchError>(())
//! ```
use crate::error::FetchError;
use crate::models::{Generation, GenerationList, PokemonRecord};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT).expect("reqwest client build")
    }
}

// Allow -, _, . unescaped in identifiers (form names like "mr-mime")
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Normalize a user-supplied name or id into one URL path segment.
fn encode_segment(identifier: &str) -> Result<String, FetchError> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(FetchError::EmptyIdentifier);
    }
    let lowered = trimmed.to_lowercase();
    Ok(percent_encoding::utf8_percent_encode(&lowered, SAFE).to_string())
}

/// Decode a raw pokemon payload into the typed, all-optional view.
pub fn parse_record(value: &Value) -> Result<PokemonRecord, FetchError> {
    Ok(PokemonRecord::deserialize(value)?)
}

impl Client {
    /// Build a client whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .timeout(timeout) // total request timeout
            .connect_timeout(timeout)
            .redirect(Policy::limited(5))
            .user_agent(concat!("pokeinfo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout,
            http,
        })
    }

    /// Point the client at another upstream (a mirror, or a local stub in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for one pokemon, without issuing the request.
    pub fn pokemon_url(&self, identifier: &str) -> Result<String, FetchError> {
        Ok(format!("{}/pokemon/{}", self.base_url, encode_segment(identifier)?))
    }

    /// GET `{base_url}/{path}` and decode the body as JSON.
    ///
    /// `path` is used verbatim; callers are responsible for encoding.
    pub fn fetch_path(&self, path: &str) -> Result<Value, FetchError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.get_json(url)
    }

    /// `GET /pokemon/{name_or_id}`.
    pub fn fetch_pokemon(&self, identifier: &str) -> Result<Value, FetchError> {
        let url = self.pokemon_url(identifier)?;
        self.get_json(url)
    }

    /// `GET /pokemon/{name_or_id}/encounters`.
    pub fn fetch_encounters(&self, identifier: &str) -> Result<Value, FetchError> {
        let url = format!("{}/encounters", self.pokemon_url(identifier)?);
        self.get_json(url)
    }

    /// `GET /pokemon?limit=..&offset=..`.
    pub fn fetch_pokemon_list(&self, limit: u32, offset: u32) -> Result<Value, FetchError> {
        self.fetch_path(&format!("pokemon?limit={limit}&offset={offset}"))
    }

    /// `GET /generation`, asking for every generation in a single page.
    pub fn fetch_generations(&self) -> Result<GenerationList, FetchError> {
        let v = self.fetch_path("generation?limit=100")?;
        Ok(GenerationList::deserialize(&v)?)
    }

    /// `GET /generation/{id}`.
    pub fn fetch_generation(&self, identifier: &str) -> Result<Generation, FetchError> {
        let v = self.fetch_path(&format!("generation/{}", encode_segment(identifier)?))?;
        Ok(Generation::deserialize(&v)?)
    }

    /// `GET /{kind}` or `GET /{kind}/{identifier}` for any PokeAPI resource kind.
    pub fn fetch_resource(
        &self,
        kind: &str,
        identifier: Option<&str>,
    ) -> Result<Value, FetchError> {
        let kind = encode_segment(kind)?;
        match identifier {
            Some(id) => self.fetch_path(&format!("{}/{}", kind, encode_segment(id)?)),
            None => self.fetch_path(&kind),
        }
    }

    fn get_json(&self, url: String) -> Result<Value, FetchError> {
        debug!("GET {}", url);
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        debug!("GET {} -> {}", url, status);

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { url });
        }
        if !status.is_success() {
            return Err(FetchError::Upstream(status.as_u16()));
        }

        // Read the body first so a bad payload is a Decode error, not a transport one.
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
