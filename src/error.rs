use thiserror::Error;

use crate::backend::OperationStatus;
use crate::codec::CodecError;

#[derive(Debug, Error)]
pub enum KeyslotError {
    #[error("The secure backend rejected the save. Please try again.")]
    SaveError,

    #[error("No secret stored in the slot.")]
    NoItem,

    #[error("The stored record is missing its payload data.")]
    UnexpectedTokenData,

    #[error("The secure backend reported an unhandled status: {0}")]
    UnhandledError(OperationStatus),

    #[error(transparent)]
    Codec(#[from] CodecError),
}
