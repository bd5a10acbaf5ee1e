//
// Copyright (c) 2025 Tudor Caloian
//

//! Key/value access to the origin-scoped durable storage.

use anyhow::Error;
#[cfg(test)]
use mockall::automock;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error as ThisError;

/// Errors raised by a key/value source. Callers treat every variant the same
/// way, as "no persisted value"; the distinction only matters for logging.
#[derive(ThisError, Debug)]
pub enum SourceError {
    #[error("durable storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

///
/// A simple persistent key/value store scoped to the site origin. Values
/// survive page reloads within the same browser profile, and may be written
/// concurrently by another browsing context running this application.
///
#[cfg_attr(test, automock)]
pub trait KeyValueSource: Send + Sync {
    /// Retrieve the value for the given key, or `None` if absent.
    fn get_value(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store the value under the given key, replacing any previous value.
    fn put_value(&self, key: &str, value: &str) -> Result<(), Error>;
}

///
/// Key/value source backed by the browser `localStorage` area. Values are
/// stored as the raw strings handed in, with no further encoding.
///
pub struct WebStorageSource;

impl WebStorageSource {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, SourceError> {
        Self::storage_in(web_sys::window())
    }

    // Reaching the storage area can itself fail: there may be no window, or
    // the browser may throw on the localStorage binding (blocked cookies,
    // some private-browsing modes). Never panic on the way in.
    fn storage_in(window: Option<web_sys::Window>) -> Result<web_sys::Storage, SourceError> {
        window
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(SourceError::Unavailable)
    }
}

impl Default for WebStorageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueSource for WebStorageSource {
    fn get_value(&self, key: &str) -> Result<Option<String>, Error> {
        let storage = self.storage()?;
        match storage.get_item(key) {
            Ok(value) => Ok(value),
            Err(err) => Err(SourceError::Access(format!("{:?}", err)).into()),
        }
    }

    fn put_value(&self, key: &str, value: &str) -> Result<(), Error> {
        let storage = self.storage()?;
        storage
            .set_item(key, value)
            .map_err(|err| SourceError::Access(format!("{:?}", err)).into())
    }
}

///
/// Key/value source backed by an in-memory map, for tests and for any build
/// that runs outside a browser. The `fail` flag simulates the storage area
/// being unavailable, as with blocked access or private browsing.
///
pub struct MemorySource {
    values: Mutex<HashMap<String, String>>,
    fail: Mutex<bool>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            fail: Mutex::new(false),
        }
    }

    /// Make every subsequent access fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        let mut fail = self.fail.lock().unwrap();
        *fail = unavailable;
    }

    fn check_available(&self) -> Result<(), Error> {
        let fail = self.fail.lock().unwrap();
        if *fail {
            Err(SourceError::Unavailable.into())
        } else {
            Ok(())
        }
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueSource for MemorySource {
    fn get_value(&self, key: &str) -> Result<Option<String>, Error> {
        self.check_available()?;
        let values = self.values.lock().unwrap();
        Ok(values.get(key).cloned())
    }

    fn put_value(&self, key: &str, value: &str) -> Result<(), Error> {
        self.check_available()?;
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
