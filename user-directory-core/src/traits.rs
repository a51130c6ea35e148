//! Abstraction over the remote directory endpoint
//!
//! Frontends depend on this trait instead of a concrete HTTP client so the
//! load lifecycle can be exercised in tests with an in-memory source.

use async_trait::async_trait;

use crate::error::DirectoryResult;
use crate::types::User;

/// A source of directory records.
///
/// The contract mirrors the endpoint it abstracts: a single call returning
/// the full collection, no paging parameters, no partial results.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the complete record collection.
    async fn fetch_users(&self) -> DirectoryResult<Vec<User>>;
}
