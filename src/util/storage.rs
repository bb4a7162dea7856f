//! Credential store for the access/refresh token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens live in browser `localStorage` under two fixed keys shared by every
//! reader and writer. Anything running on the same origin can read them; that
//! is the trust boundary of this client, not something this module hides.
//!
//! DESIGN
//! ======
//! The backing key/value store sits behind [`TokenStorage`] so session logic can
//! be exercised against [`MemoryStorage`] in native unit tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Storage slot holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access";
/// Storage slot holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh";

/// Error returned by a [`TokenStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (no window, private mode, SSR/native build).
    #[error("local storage unavailable")]
    Unavailable,
    /// The backend refused the operation (quota, security policy).
    #[error("local storage rejected {op} for '{key}'")]
    Rejected { op: &'static str, key: String },
}

/// Minimal key/value surface of `window.localStorage`.
pub trait TokenStorage {
    /// Read the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached or refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` backend. Unavailable outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Rejected { op: "read", key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Rejected { op: "write", key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Rejected { op: "remove", key: key.to_owned() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory backend for native tests.
#[derive(Debug)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
    read_only_key: RefCell<Option<String>>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self { items: RefCell::new(HashMap::new()), available: Cell::new(true), read_only_key: RefCell::new(None) }
    }
}

impl MemoryStorage {
    /// A backend that fails every operation with [`StorageError::Unavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.available.set(false);
        storage
    }

    /// Toggle availability; existing items are kept.
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Refuse writes to `key` as a full or locked-down storage would.
    pub fn reject_writes_to(&self, key: &str) {
        *self.read_only_key.borrow_mut() = Some(key.to_owned());
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.available.get() { Ok(()) } else { Err(StorageError::Unavailable) }
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        if self.read_only_key.borrow().as_deref() == Some(key) {
            return Err(StorageError::Rejected { op: "write", key: key.to_owned() });
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Snapshot of both stored tokens. Either may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

impl Tokens {
    /// True when neither slot holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh.is_none()
    }
}

/// Typed access to the two token slots over an injectable backend.
///
/// Cloning shares the backend. There is no locking: the UI thread never
/// interleaves two writes, so the last writer wins.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Rc<dyn TokenStorage>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}

impl CredentialStore {
    pub fn new(backend: Rc<dyn TokenStorage>) -> Self {
        Self { backend }
    }

    /// Store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Overwrite both slots.
    ///
    /// If only the access slot could be written, both slots are cleared so a
    /// new access token never sits next to another session's refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if either write fails.
    pub fn set(&self, access: &str, refresh: &str) -> Result<(), StorageError> {
        self.backend.set_item(ACCESS_TOKEN_KEY, access)?;
        self.backend.set_item(REFRESH_TOKEN_KEY, refresh).inspect_err(|_| {
            if let Err(e) = self.clear() {
                log::warn!("failed to roll back partial token write: {e}");
            }
        })
    }

    /// Read both slots. An unreachable backend reads as empty.
    #[must_use]
    pub fn get(&self) -> Tokens {
        let read = |key: &str| match self.backend.get_item(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                log::debug!("token read failed for '{key}': {e}");
                None
            }
        };
        Tokens { access: read(ACCESS_TOKEN_KEY), refresh: read(REFRESH_TOKEN_KEY) }
    }

    /// Remove both slots.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`]; the second slot is still attempted.
    pub fn clear(&self) -> Result<(), StorageError> {
        let access = self.backend.remove_item(ACCESS_TOKEN_KEY);
        let refresh = self.backend.remove_item(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }

    /// Write a refreshed access token only if the stored refresh token is still
    /// `expected_refresh`. Returns whether the write happened.
    ///
    /// A `false` result means the session was cleared or replaced while the
    /// refresh request was in flight; the stale result must be dropped.
    pub fn replace_access(&self, expected_refresh: &str, access: &str, rotated_refresh: Option<&str>) -> bool {
        if self.get().refresh.as_deref() != Some(expected_refresh) {
            return false;
        }
        let written = self.backend.set_item(ACCESS_TOKEN_KEY, access).and_then(|()| match rotated_refresh {
            Some(refresh) => self.backend.set_item(REFRESH_TOKEN_KEY, refresh),
            None => Ok(()),
        });
        match written {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to store refreshed token: {e}");
                false
            }
        }
    }
}
