use crate::Result as StoreResult;

/// A synchronous string-valued store shared by every identity.
///
/// Isolation between identities comes only from key naming; any holder of a
/// store can read or overwrite any key.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> StoreResult<()>;

    /// Lists every key currently stored.
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Copies the value under `from` to `to` unchanged. Copying an absent key
    /// does nothing.
    fn copy(&mut self, from: &str, to: &str) -> StoreResult<()> {
        match self.get(from)? {
            Some(value) => self.set(to, &value),
            None => Ok(()),
        }
    }
}
