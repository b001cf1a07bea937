use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read `{key}` from storage: {reason}")]
    Read { key: String, reason: String },
    #[error("could not write `{key}` to storage: {reason}")]
    Write { key: String, reason: String },
    #[error("stored value under `{key}` is not valid: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize value for `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read and deserialize a JSON value. A missing key yields `Ok(None)`.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Parse {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &json)
}

/// How the browser answered the request for `localStorage`.
#[derive(Debug, Clone)]
enum Backend<S> {
    /// No window, or the browser exposes no storage (private mode in some
    /// browsers). Reads are empty, writes are skipped.
    Missing,
    /// Accessing `window.localStorage` threw (e.g. SecurityError in a
    /// sandboxed iframe). Every operation reports the failure.
    Denied(String),
    Ready(S),
}

impl<S> Backend<S> {
    /// `None` means there is no window at all.
    fn from_lookup(lookup: Option<Result<Option<S>, String>>) -> Self {
        match lookup {
            None | Some(Ok(None)) => Backend::Missing,
            Some(Ok(Some(storage))) => Backend::Ready(storage),
            Some(Err(reason)) => Backend::Denied(reason),
        }
    }

    fn for_read(&self, key: &str) -> Result<Option<&S>, StoreError> {
        match self {
            Backend::Missing => Ok(None),
            Backend::Denied(reason) => Err(StoreError::Read {
                key: key.to_string(),
                reason: reason.clone(),
            }),
            Backend::Ready(storage) => Ok(Some(storage)),
        }
    }

    fn for_write(&self, key: &str) -> Result<Option<&S>, StoreError> {
        match self {
            Backend::Missing => Ok(None),
            Backend::Denied(reason) => Err(StoreError::Write {
                key: key.to_string(),
                reason: reason.clone(),
            }),
            Backend::Ready(storage) => Ok(Some(storage)),
        }
    }
}

fn lookup_storage() -> Option<Result<Option<web_sys::Storage>, String>> {
    let window = web_sys::window()?;
    Some(window.local_storage().map_err(|e| format!("{:?}", e)))
}

/// The browser's `localStorage`, scoped to the site origin.
///
/// When the browser has no storage every read comes back empty and every write
/// is skipped; the site then simply behaves as if visited for the first time.
/// When access is refused, reads and writes fail so the caller can report it.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    backend: Backend<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        Self {
            backend: Backend::from_lookup(lookup_storage()),
        }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let Some(storage) = self.backend.for_read(key)? else {
            return Ok(None);
        };
        storage.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = self.backend.for_write(key)? else {
            return Ok(());
        };
        // Quota exhaustion lands here too.
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let Some(storage) = self.backend.for_write(key)? else {
            return Ok(());
        };
        storage.remove_item(key).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_read_missing_key_is_none() {
        let store = MemoryStore::default();
        let value: Option<Sample> = read_json(&store, "nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read_json() {
        let store = MemoryStore::default();
        let sample = Sample {
            name: "Ana".to_string(),
            count: 3,
        };
        write_json(&store, "sample", &sample).unwrap();
        let back: Option<Sample> = read_json(&store, "sample").unwrap();
        assert_eq!(back, Some(sample));
    }

    #[test]
    fn test_corrupted_json_is_parse_error() {
        let store = MemoryStore::default();
        store.put_raw("sample", "{not json");
        let result: Result<Option<Sample>, _> = read_json(&store, "sample");
        assert!(matches!(result, Err(StoreError::Parse { ref key, .. }) if key == "sample"));
    }

    #[test]
    fn test_missing_storage_reads_empty_and_skips_writes() {
        let no_window: Backend<()> = Backend::from_lookup(None);
        assert!(matches!(no_window.for_read("k"), Ok(None)));
        assert!(matches!(no_window.for_write("k"), Ok(None)));

        let no_storage: Backend<()> = Backend::from_lookup(Some(Ok(None)));
        assert!(matches!(no_storage.for_read("k"), Ok(None)));
    }

    #[test]
    fn test_denied_storage_fails_reads_and_writes() {
        let denied: Backend<()> = Backend::from_lookup(Some(Err("SecurityError".to_string())));
        assert!(matches!(
            denied.for_read("comments"),
            Err(StoreError::Read { ref key, ref reason }) if key == "comments" && reason == "SecurityError"
        ));
        assert!(matches!(denied.for_write("comments"), Err(StoreError::Write { .. })));
    }

    #[test]
    fn test_available_storage_is_used() {
        let ready = Backend::from_lookup(Some(Ok(Some(7u8))));
        assert!(matches!(ready.for_read("k"), Ok(Some(&7))));
        assert!(matches!(ready.for_write("k"), Ok(Some(&7))));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let store = MemoryStore::default();
        store.fail_writes(true);
        let result = write_json(&store, "sample", &1u32);
        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert!(store.raw("sample").is_none());
    }
}
