use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::Zeroize;

use crate::backend::{OperationStatus, SecureBackend};
use crate::codec::Codec;
use crate::error::KeyslotError;

/// Logical key identifying the slot when none is supplied.
pub const DEFAULT_SLOT_KEY: &str = "sensitive_user_key";

pub type Result<T> = std::result::Result<T, KeyslotError>;

/// Single-slot secret store: one fixed logical key, zero or one secret at a
/// time. Writing replaces — the old secret is deleted before the new one is
/// added, so a caller never ends up with two stale copies.
///
/// The store itself is stateless; the slot's state lives in the backend and
/// persists across process lifetimes.
///
/// # Concurrency
///
/// The replace sequence inside [`store`](SecretStore::store)
/// (retrieve-check, delete, add) is not atomic: the backend offers no
/// transaction across the three primitives. Callers that may run `store` or
/// `delete` concurrently against the same slot must serialize access
/// externally (a mutex or a single-writer task). `retrieve` is a pure read
/// and safe to call concurrently with itself, though it may observe either
/// the old or the new value during a concurrent `store`. The store never
/// retries a failed backend call.
pub struct SecretStore<B, C> {
    backend: B,
    codec: C,
    key: String,
}

impl<B: SecureBackend, C: Codec> SecretStore<B, C> {
    /// Store over [`DEFAULT_SLOT_KEY`].
    pub fn new(backend: B, codec: C) -> Self {
        Self::with_key(backend, codec, DEFAULT_SLOT_KEY)
    }

    /// Store over a caller-chosen logical key. The key is fixed for the
    /// lifetime of the store; all operations address the same slot.
    pub fn with_key(backend: B, codec: C, key: impl Into<String>) -> Self {
        Self {
            backend,
            codec,
            key: key.into(),
        }
    }

    /// Persist `model` in the slot, replacing any existing secret.
    ///
    /// If the slot is occupied the old secret is deleted first; a failed
    /// delete propagates as-is and the new value is not written, so callers
    /// can tell "couldn't clear the old value" apart from "couldn't write
    /// the new one" (`SaveError`).
    pub fn store<T>(&self, model: &T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        if self.exists::<T>()? {
            self.delete()?;
        }

        let mut payload = self.codec.encode(model)?;
        let status = self.backend.add(&self.key, &payload);
        payload.zeroize();

        match status {
            OperationStatus::Success => Ok(()),
            _ => Err(KeyslotError::SaveError),
        }
    }

    /// Read and decode the secret currently in the slot. Never mutates it.
    pub fn retrieve<T: DeserializeOwned>(&self) -> Result<T> {
        let (status, record) = self.backend.query(&self.key);
        match status {
            OperationStatus::Success => {}
            OperationStatus::NotFound => return Err(KeyslotError::NoItem),
            other => return Err(KeyslotError::UnhandledError(other)),
        }

        let mut payload = record
            .and_then(|r| r.value_data)
            .ok_or(KeyslotError::UnexpectedTokenData)?;

        let model = self.codec.decode(&payload);
        payload.zeroize();
        Ok(model?)
    }

    /// Clear the slot. Removing an already-empty slot is treated as
    /// success, so delete is idempotent; any other backend status surfaces
    /// as `UnhandledError`.
    pub fn delete(&self) -> Result<()> {
        match self.backend.remove(&self.key) {
            OperationStatus::Success | OperationStatus::NotFound => Ok(()),
            other => Err(KeyslotError::UnhandledError(other)),
        }
    }

    /// Whether the slot currently holds a secret. `NoItem` maps to `false`;
    /// every other failure propagates untouched.
    pub fn exists<T: DeserializeOwned>(&self) -> Result<bool> {
        match self.retrieve::<T>() {
            Ok(_) => Ok(true),
            Err(KeyslotError::NoItem) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
