//! Fatal errors surfaced by the runtime.
//!
//! Unmet preconditions, missing inputs and missed rolls are not errors; they
//! come back as [`reaction_core::ReactionResult`] values. Everything here
//! aborts the call.
use reaction_core::{QuantityError, ReactionId};
use thiserror::Error;

use crate::ports::{PortError, PortKind};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("reaction '{0}' not found")]
    ReactionNotFound(ReactionId),

    /// A scaled output floored to a non-positive amount. Inputs were already
    /// consumed when this is raised and are not refunded.
    #[error("reaction produced an invalid output")]
    InvalidOutput(#[from] QuantityError),

    #[error("{port} port failed")]
    Port {
        port: PortKind,
        #[source]
        source: PortError,
    },

    #[error("engine requires a {port} port to be configured before building")]
    MissingPort { port: PortKind },
}

impl RuntimeError {
    pub(crate) fn port(port: PortKind) -> impl FnOnce(PortError) -> Self {
        move |source| RuntimeError::Port { port, source }
    }
}
