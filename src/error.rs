//! Error type for colormap warping.

/// Everything that can go wrong while building a warped colormap.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A caller-supplied parameter violates a documented precondition.
    #[error("invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    /// No colormap is registered under the given name.
    #[error("unknown colormap “{0}”")]
    LookupFailure(String),
    /// The root finder could not bracket or converge, or a special
    /// function produced a non-finite value.
    #[error("numerical failure: {0}")]
    NumericalFailure(String),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: impl ToString,
                          reason: &'static str) -> Self {
        Error::InvalidArgument { name, value: value.to_string(), reason }
    }
}

/// Result type alias for colormap warping.
pub type Result<T> = std::result::Result<T, Error>;
