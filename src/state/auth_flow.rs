//! Login, logout and registration orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these flows and navigate to the returned [`AppRoute`]. The flows
//! own every write to the credential store outside of token refresh.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use std::rc::Rc;

use crate::net::api::{ApiError, AuthApi, GENERIC_FAILURE_MESSAGE};
use crate::net::types::Credentials;
use crate::state::session::SessionAuthority;
use crate::util::route::AppRoute;
use crate::util::storage::{CredentialStore, StorageError};

/// Failure of a login or registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not store credentials: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Inline form message: the server's `detail`, or a generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            Self::Storage(_) => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

#[derive(Clone)]
pub struct AuthFlows {
    store: CredentialStore,
    api: Rc<dyn AuthApi>,
}

impl AuthFlows {
    pub fn new(store: CredentialStore, api: Rc<dyn AuthApi>) -> Self {
        Self { store, api }
    }

    /// Flows sharing the authority's store and API client.
    #[must_use]
    pub fn from_authority(authority: &SessionAuthority) -> Self {
        Self::new(authority.store().clone(), authority.api().clone())
    }

    /// Submit credentials and store the returned token pair.
    ///
    /// A rejected login leaves any existing session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] when the server rejects the request and
    /// [`AuthError::Storage`] when the tokens cannot be persisted.
    pub async fn login(&self, credentials: &Credentials) -> Result<AppRoute, AuthError> {
        let pair = self.api.login(credentials).await?;
        self.store.set(&pair.access, &pair.refresh)?;
        log::info!("signed in as {}", credentials.username);
        Ok(AppRoute::Home)
    }

    /// Drop the session. Always succeeds, with or without a prior session.
    pub fn logout(&self) -> AppRoute {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear credentials on logout: {e}");
        }
        AppRoute::Login
    }

    /// Clear any existing session, then create the account.
    ///
    /// Registration never signs the user in; the caller goes to the login page.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] when the server rejects the registration.
    pub async fn register(&self, credentials: &Credentials) -> Result<AppRoute, AuthError> {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear credentials before registering: {e}");
        }
        self.api.register(credentials).await?;
        log::info!("registered {}", credentials.username);
        Ok(AppRoute::Login)
    }
}
