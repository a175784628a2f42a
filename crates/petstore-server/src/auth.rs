use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::error::ServerResult;

#[derive(Clone, Debug)]
pub struct Identity {
    pub name: String,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self { name: "anonymous".into() }
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Clone, Debug)]
pub enum Credentials {
    ApiKey(String),
    Anonymous,
}

#[derive(Clone, Copy, Debug)]
pub enum Action {
    ReadPets,
    WritePets,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadPets => write!(f, "read:pets"),
            Self::WritePets => write!(f, "write:pets"),
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity>;
    async fn authorize(&self, identity: &Identity, action: &Action) -> ServerResult<bool>;
}

pub struct AllowAllAuth;

#[async_trait]
impl AuthProvider for AllowAllAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        match credentials {
            Credentials::ApiKey(key) => {
                Ok(Identity::user(format!("api-key:{}", &key[..8.min(key.len())])))
            }
            Credentials::Anonymous => Ok(Identity::anonymous()),
        }
    }

    async fn authorize(&self, _identity: &Identity, _action: &Action) -> ServerResult<bool> {
        Ok(true)
    }
}

/// Resolve the caller's identity from the `api_key` request header.
///
/// The key is advisory: it names the caller in logs but never gates the
/// request. Callers the provider cannot authenticate or authorize proceed
/// as anonymous.
pub async fn identify(
    provider: &dyn AuthProvider,
    headers: &HeaderMap,
    action: Action,
) -> Identity {
    let credentials = match headers.get("api_key").and_then(|v| v.to_str().ok()) {
        Some(key) => Credentials::ApiKey(key.to_string()),
        None => Credentials::Anonymous,
    };
    let identity = match provider.authenticate(&credentials).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!("authentication failed, continuing as anonymous: {}", e);
            Identity::anonymous()
        }
    };
    match provider.authorize(&identity, &action).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!("{} not authorized for {}, allowing anyway", identity.name, action)
        }
        Err(e) => tracing::warn!("authorization check failed for {}: {}", action, e),
    }
    tracing::debug!("{} by {}", action, identity.name);
    identity
}
