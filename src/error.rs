//! Error types.

use std::process::ExitStatus;

/// Error enumerates the possible hostcrab error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a protected endpoint is called without an `Authorization` header of the
    /// form `Bearer <token>`.
    #[error("Unauthorized")]
    Unauthorized,

    /// Returned when a bearer token has a bad signature, is malformed, or has expired. The
    /// specific cause is never surfaced to the client.
    #[error("Invalid token")]
    InvalidToken,

    /// Returned when the [`/login` API endpoint][crate::api#login-post] is given an unknown
    /// username or a wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Returned when a required request body field is absent or empty.
    #[error("{0} object is missing")]
    MissingField(&'static str),

    /// Returned when the `ip` of an [`/add`][crate::api#add-post] request fails
    /// [`valid_ipv4`][crate::api::model::valid_ipv4].
    #[error("Invalid ip address")]
    InvalidIp(String),

    /// Returned when the `host` of an [`/add`][crate::api#add-post] request contains whitespace,
    /// which the `<ip> <hostname>` line format can't hold.
    #[error("Invalid host name")]
    InvalidHost(String),

    /// Returned when adding a hostname that is already in the hosts file.
    #[error("host already exists")]
    HostExists(String),

    /// Returned when deleting a hostname that isn't in the hosts file.
    #[error("host does not exist")]
    HostNotFound(String),

    /// Returned when the configured reload command ran but exited unsuccessfully.
    #[error("reload command `{command}` exited with {status}")]
    ReloadFailed { command: String, status: ExitStatus },

    /// Wraps a store or reload failure with the message reported to API clients.
    #[error("{context}")]
    Failed {
        context: &'static str,
        #[source]
        cause: Box<Error>,
    },

    /// Returned when a [`Config`][crate::config::Config] is loaded with unusable settings.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// Returned when a session token can't be encoded.
    #[error("token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Returned when a generic IO error occurs.
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g. the config or credential file) fails due
    /// to invalid JSON content.
    #[error("invalid JSON: {0}")]
    InvalidJSON(#[from] serde_json::Error),
}

impl Error {
    /// Returns a closure wrapping an error as [`Error::Failed`] with the given client-facing
    /// context, for use with [`Result::map_err`].
    pub fn failed(context: &'static str) -> impl FnOnce(Error) -> Error {
        move |cause| Error::Failed {
            context,
            cause: Box::new(cause),
        }
    }
}
