//! GitHub API client.
//!
//! A thin façade over octocrab that issues authenticated requests against a
//! fixed endpoint set and normalizes every failure (transport errors,
//! non-success statuses, empty or undecodable bodies) into an empty JSON
//! map so callers never have to unwind.

use anyhow::{Context, Result};
use colored::*;
use octocrab::Octocrab;
use serde_json::Value;

use crate::constants;
use crate::errors::ApiError;

/// Decoded JSON object returned by the API.
pub type JsonObject = serde_json::Map<String, Value>;

/// HTTP verbs the commander issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::str::FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => anyhow::bail!("Unsupported HTTP method: {}", other),
        }
    }
}

pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Build a client for the public GitHub API with a bearer token.
    ///
    /// The token is whatever the profile resolves to. Without GITHUB_TOKEN
    /// set that is the stored obfuscated hash, which cannot actually
    /// authenticate; see DESIGN.md.
    pub fn new(token: String) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token)
            .base_uri(constants::api::BASE_URL)
            .context("Invalid API base URI")?
            .build()
            .context("Failed to create GitHub client")?;

        Ok(Self { octocrab })
    }

    /// Wrap an already-built octocrab instance (tests point this at a mock
    /// server).
    pub fn with_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Issue a request and return the decoded body, or a typed error the
    /// caller must handle.
    ///
    /// A 2xx response whose body is empty, malformed, or not a JSON object
    /// yields an empty map: octocrab rejects non-success statuses before
    /// decoding, so a decode failure here is a successful call with nothing
    /// to return.
    pub async fn try_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<JsonObject, ApiError> {
        let result: Result<Value, octocrab::Error> = match method {
            Method::Get => self.octocrab.get(path, None::<&()>).await,
            Method::Post => self.octocrab.post(path, body).await,
            Method::Put => self.octocrab.put(path, body).await,
            Method::Delete => self.octocrab.delete(path, None::<&()>).await,
        };

        Self::normalize(result)
    }

    /// Issue a request, normalizing every failure to an empty map.
    ///
    /// Transport failures and non-success statuses print a diagnostic and
    /// return `{}`; they are terminal for this call. No retries, no backoff.
    pub async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> JsonObject {
        match self.try_request(method, path, body).await {
            Ok(map) => map,
            Err(err) => {
                eprintln!("{} {}", "✗ API request failed:".red(), err);
                JsonObject::new()
            }
        }
    }

    /// GET `/user`: the authenticated user's account record.
    pub async fn current_user(&self) -> JsonObject {
        self.request(Method::Get, constants::api::USER_PATH, None)
            .await
    }

    /// GET `/search/repositories`: repository search.
    ///
    /// The query goes through octocrab's parameter serialization, so it may
    /// contain spaces and qualifiers (`user:octocat stars:>10`).
    pub async fn search_repositories(&self, query: &str) -> JsonObject {
        let result: Result<Value, octocrab::Error> = self
            .octocrab
            .get(constants::api::SEARCH_REPOS_PATH, Some(&[("q", query)]))
            .await;

        match Self::normalize(result) {
            Ok(map) => map,
            Err(err) => {
                eprintln!("{} {}", "✗ API request failed:".red(), err);
                JsonObject::new()
            }
        }
    }

    fn normalize(result: Result<Value, octocrab::Error>) -> Result<JsonObject, ApiError> {
        match result {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Ok(JsonObject::new()),
            Err(err) => match ApiError::from(err) {
                ApiError::Decode(_) => Ok(JsonObject::new()),
                other => Err(other),
            },
        }
    }
}
