use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use keyring::{Entry, Error as KeyringError};
use zeroize::Zeroize;

use crate::backend::{OperationStatus, SecretRecord, SecureBackend};

/// Default keychain service name for slots created by this crate.
pub const DEFAULT_SERVICE: &str = "io.keyslot.store";

/// Platform vault adapter over the `keyring` crate:
/// macOS Keychain, Windows Credential Manager, Linux Secret Service.
///
/// The platform entry stores a string password, so the byte payload is
/// base64-encoded on the way in and decoded on the way out. An entry whose
/// stored string is not valid base64 surfaces as a record with no value
/// data, which the core reports as `UnexpectedTokenData`.
#[derive(Debug)]
pub struct KeyringBackend {
    service: String,
}

impl KeyringBackend {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, KeyringError> {
        Entry::new(&self.service, key)
    }
}

impl Default for KeyringBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE)
    }
}

impl SecureBackend for KeyringBackend {
    fn add(&self, key: &str, payload: &[u8]) -> OperationStatus {
        let entry = match self.entry(key) {
            Ok(entry) => entry,
            Err(e) => return status_of(&e),
        };

        // set_password is an upsert on every platform; preserve add
        // semantics by refusing to overwrite an occupied key.
        match entry.get_password() {
            Ok(mut existing) => {
                existing.zeroize();
                return OperationStatus::Duplicate;
            }
            Err(KeyringError::NoEntry) => {}
            Err(e) => return status_of(&e),
        }

        let mut encoded = BASE64.encode(payload);
        let status = match entry.set_password(&encoded) {
            Ok(()) => OperationStatus::Success,
            Err(e) => status_of(&e),
        };
        encoded.zeroize();
        status
    }

    fn query(&self, key: &str) -> (OperationStatus, Option<SecretRecord>) {
        let entry = match self.entry(key) {
            Ok(entry) => entry,
            Err(e) => return (status_of(&e), None),
        };

        match entry.get_password() {
            Ok(mut encoded) => {
                let value_data = BASE64.decode(encoded.as_bytes()).ok();
                encoded.zeroize();
                let record = SecretRecord {
                    account: key.to_string(),
                    value_data,
                };
                (OperationStatus::Success, Some(record))
            }
            Err(e) => (status_of(&e), None),
        }
    }

    fn remove(&self, key: &str) -> OperationStatus {
        let entry = match self.entry(key) {
            Ok(entry) => entry,
            Err(e) => return status_of(&e),
        };

        match entry.delete_password() {
            Ok(()) => OperationStatus::Success,
            Err(e) => status_of(&e),
        }
    }
}

/// The keyring crate reports errors as an enum, not integer codes; each
/// variant gets a stable synthetic code so `UnhandledError` stays
/// diagnosable across platforms.
fn status_of(err: &KeyringError) -> OperationStatus {
    match err {
        KeyringError::NoEntry => OperationStatus::NotFound,
        KeyringError::PlatformFailure(_) => OperationStatus::Other(-1),
        KeyringError::NoStorageAccess(_) => OperationStatus::Other(-2),
        KeyringError::BadEncoding(_) => OperationStatus::Other(-3),
        KeyringError::TooLong(_, _) => OperationStatus::Other(-4),
        KeyringError::Invalid(_, _) => OperationStatus::Other(-5),
        KeyringError::Ambiguous(_) => OperationStatus::Other(-6),
        _ => OperationStatus::Other(-9),
    }
}
