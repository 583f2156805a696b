use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash or parse a password hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Writing a rendered banner image to the upload directory failed.
    #[error("Failed to write upload {path}: {source}")]
    Upload {
        /// Destination path of the upload
        path: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },
}
