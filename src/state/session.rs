//! Session authority: decides whether the visitor is authenticated.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards ask [`SessionAuthority::is_authenticated`] once per mount. The
//! answer is derived from the stored tokens on every call; nothing about the
//! session is cached outside the credential store.
//!
//! DESIGN
//! ======
//! - A missing access token is "unauthenticated" with no network traffic.
//! - An access token without a readable `exp` is treated as valid (fail open).
//!   Issuers that omit expiry would otherwise lock every visitor out.
//! - An expired access token triggers exactly one refresh. A refresh result is
//!   only written if the store still holds the refresh token it was minted
//!   from, so a logout during the request is never undone.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use crate::net::api::AuthApi;
use crate::util::storage::CredentialStore;
use crate::util::token;

/// Current unix time in seconds.
pub type Clock = Rc<dyn Fn() -> i64>;

/// Wall clock for the running build.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn system_clock() -> Clock {
    #[cfg(feature = "csr")]
    {
        Rc::new(|| (js_sys::Date::now() / 1000.0).floor() as i64)
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        })
    }
}

/// Derived, never-persisted view of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub display_name: Option<String>,
}

/// Local verdict on an access token, before any refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    Missing,
    Valid,
    Expired,
}

/// Classify `access` at unix time `now`.
///
/// Undecodable tokens and tokens without `exp` are `Valid`; only the server
/// can reject them.
#[must_use]
pub fn token_status(access: Option<&str>, now: i64) -> TokenStatus {
    let Some(access) = access else {
        return TokenStatus::Missing;
    };
    match token::decode(access).ok().and_then(|claims| claims.expires_at()) {
        Some(exp) if exp <= now => TokenStatus::Expired,
        _ => TokenStatus::Valid,
    }
}

#[derive(Clone)]
pub struct SessionAuthority {
    store: CredentialStore,
    api: Rc<dyn AuthApi>,
    clock: Clock,
}

impl std::fmt::Debug for SessionAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthority").field("store", &self.store).finish_non_exhaustive()
    }
}

impl SessionAuthority {
    pub fn new(store: CredentialStore, api: Rc<dyn AuthApi>, clock: Clock) -> Self {
        Self { store, api, clock }
    }

    #[must_use]
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    #[must_use]
    pub fn api(&self) -> &Rc<dyn AuthApi> {
        &self.api
    }

    /// Synchronous view from the stored tokens. Never refreshes.
    #[must_use]
    pub fn session(&self) -> Session {
        let access = self.store.get().access;
        let authenticated = token_status(access.as_deref(), (self.clock)()) == TokenStatus::Valid;
        Session { authenticated, display_name: access.as_deref().and_then(token::display_name) }
    }

    /// Greeting name for the current access token, or `"there"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        token::display_name_or_placeholder(self.store.get().access.as_deref())
    }

    /// Whether the visitor holds a usable session, refreshing once if the
    /// access token has expired.
    pub async fn is_authenticated(&self) -> bool {
        let tokens = self.store.get();
        match token_status(tokens.access.as_deref(), (self.clock)()) {
            TokenStatus::Missing => {
                log::debug!("no access token stored");
                false
            }
            TokenStatus::Valid => true,
            TokenStatus::Expired => match tokens.refresh {
                Some(refresh) => self.refresh(&refresh).await,
                None => {
                    log::debug!("access token expired and no refresh token stored");
                    self.clear();
                    false
                }
            },
        }
    }

    async fn refresh(&self, refresh: &str) -> bool {
        match self.api.refresh(refresh).await {
            Ok(fresh) => {
                if self.store.replace_access(refresh, &fresh.access, fresh.refresh.as_deref()) {
                    log::debug!("access token refreshed");
                    return true;
                }
                // Session was cleared or replaced while the request was in flight.
                log::info!("discarding stale refresh result");
                self.session().authenticated
            }
            Err(e) => {
                log::warn!("token refresh failed: {e}");
                if self.store.get().refresh.as_deref() == Some(refresh) {
                    self.clear();
                }
                false
            }
        }
    }

    fn clear(&self) {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear credentials: {e}");
        }
    }
}
