//! Browser adapters for the session store's storage and delay seams.
//!
//! Client-side (hydrate): `window.localStorage` and `setTimeout` via
//! `gloo-timers`. Server-side (SSR): storage reports itself unavailable and
//! the delay resolves at once, since neither is meaningful outside a browser.

use std::time::Duration;

use session::{Delay, Storage, StorageError};

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn backend_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(backend_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(backend_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(backend_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// `setTimeout`-backed delay for the simulated remote call.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

#[async_trait::async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(feature = "hydrate"))]
        let _ = duration;
    }
}
