//! User directory backend and the one-shot display name load

use crate::constants::USERS_TABLE;
use crate::types::UserRecord;
use futures::future::BoxFuture;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid backend config: {0}")]
    InvalidConfig(String),
}

/// Source of user rows. Swapped for a stub in tests.
pub trait UserDirectory: Send + Sync {
    fn list_users(&self) -> BoxFuture<'_, Result<Vec<UserRecord>, DirectoryError>>;
}

/// PostgREST endpoint (Supabase `rest/v1`) authenticated with an anon key
pub struct SupabaseDirectory {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseDirectory {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, DirectoryError> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| DirectoryError::InvalidConfig(format!("{}: {}", e, base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(DirectoryError::InvalidConfig(format!(
                "backend url must be http(s) with a host: {}",
                base_url
            )));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn users_url(&self) -> String {
        format!("{}/rest/v1/{}?select=*", self.base_url, USERS_TABLE)
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let url = self.users_url();
        debug!(url = %url, "Fetching users");

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(DirectoryError::Status { status, body });
        }

        let users: Vec<UserRecord> = serde_json::from_str(&body)?;
        debug!(count = users.len(), "Users response parsed");
        Ok(users)
    }
}

impl UserDirectory for SupabaseDirectory {
    fn list_users(&self) -> BoxFuture<'_, Result<Vec<UserRecord>, DirectoryError>> {
        Box::pin(self.fetch_users())
    }
}

/// Used when no backend is configured: always an empty listing
pub struct NoUserDirectory;

impl UserDirectory for NoUserDirectory {
    fn list_users(&self) -> BoxFuture<'_, Result<Vec<UserRecord>, DirectoryError>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

/// Pick the configured backend, falling back to `NoUserDirectory`
pub fn directory_from_config(
    url: Option<&str>,
    key: Option<&str>,
) -> Box<dyn UserDirectory> {
    match (url, key) {
        (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
            match SupabaseDirectory::new(url, key) {
                Ok(dir) => {
                    info!(url = %url, "Using remote user directory");
                    Box::new(dir)
                }
                Err(e) => {
                    warn!(error = %e, "Ignoring backend config");
                    Box::new(NoUserDirectory)
                }
            }
        }
        _ => {
            info!("No backend configured, skipping user lookup");
            Box::new(NoUserDirectory)
        }
    }
}

/// Name of the first listed user, if any. Failures are logged, never returned.
pub async fn load_user_name(directory: &dyn UserDirectory) -> Option<String> {
    match directory.list_users().await {
        Ok(users) => {
            let name = users.into_iter().next().map(|u| u.name);
            debug!(found = name.is_some(), "User lookup complete");
            name
        }
        Err(e) => {
            error!(error = %e, "Error loading user");
            None
        }
    }
}
