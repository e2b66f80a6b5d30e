use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the configuration boundary.
///
/// The physics core itself has no error taxonomy: values are validated
/// once on the way in, and the collision halt is a designed terminal
/// event, not a fault.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid body parameter supplied by a `ParameterSource`.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A `ParameterSource` has no entry for the requested body.
    #[error("unknown body id {0}")]
    UnknownBody(u32),
}
