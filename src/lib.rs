//! Single-slot credential store over the OS keychain.
//!
//! One fixed logical key holds zero or one serialized secret. Writing
//! replaces: the old secret is deleted before the new one is added, so a
//! caller never ends up with two stale copies. Platform failure codes are
//! mapped to the stable [`KeyslotError`] taxonomy.
//!
//! The core [`SecretStore`] is generic over two capabilities: a
//! [`SecureBackend`](backend::SecureBackend) (the platform vault, or the
//! in-memory test double) and a [`Codec`](codec::Codec) (serde_json by
//! default).

pub mod backend;
pub mod codec;
pub mod error;
pub mod slot;

pub use backend::keyring::KeyringBackend;
pub use backend::memory::MemoryBackend;
pub use codec::{Codec, CodecError, JsonCodec};
pub use error::KeyslotError;
pub use slot::{SecretStore, DEFAULT_SLOT_KEY};
