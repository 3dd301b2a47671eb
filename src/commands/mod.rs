pub mod delete;
pub mod set;
pub mod show;
pub mod status;

use keyslot::{JsonCodec, KeyringBackend, SecretStore};

pub use keyslot::backend::keyring::DEFAULT_SERVICE;

/// Every command talks to the same slot: the default logical key under the
/// chosen keychain service, through the JSON codec.
fn open_store(service: &str) -> SecretStore<KeyringBackend, JsonCodec> {
    SecretStore::new(KeyringBackend::new(service), JsonCodec)
}
