pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a single client operation.
///
/// Absent entities are not errors: `item` and `user` return `Ok(None)` when
/// the server responds with a JSON `null` body. `None` is produced only
/// after the body has been read and decoded successfully, so a failed
/// request can never be mistaken for a missing entity.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to decode response from `{url}`")]
  Decode {
    source: serde_json::Error,
    url: String,
  },
  #[error("request to `{url}` returned status {status}")]
  Status {
    status: reqwest::StatusCode,
    url: String,
  },
  #[error("request to `{url}` failed")]
  Transport {
    source: reqwest::Error,
    url: String,
  },
  #[error("unknown category `{token}`")]
  UnknownCategory { token: String },
}
