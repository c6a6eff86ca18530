use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    #[serde(alias = "message")]
    pub error: String,
}

/// One page of a list endpoint.
///
/// Every list endpoint answers `{ "data": [...], "total": n }` where `total` is the number of
/// matching rows across all pages, not the length of `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}
