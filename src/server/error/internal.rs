use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored curriculum column does not hold a list of strings.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse curriculum of workshop {workshop_id}: {source}")]
    InvalidCurriculum {
        /// The workshop whose row is malformed
        workshop_id: i32,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}
