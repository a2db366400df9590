use crate::error::ApiError;
use async_trait::async_trait;
use core_types::{Page, Pagination, RecordId};
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub mod error;
pub mod rest;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
// --- Public API ---
pub use rest::RestDataProvider;

/// The abstract interface for fetching records of a named resource.
/// This trait is the contract the views use, allowing the underlying
/// implementation (REST or in-memory) to be swapped out.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches one page of `resource`. Records come back in store order.
    async fn get_list<T>(&self, resource: &str, pagination: &Pagination) -> Result<Page<T>, ApiError>
    where
        T: DeserializeOwned + Send + 'static;

    /// Fetches a single record by id, failing with `ApiError::NotFound` if the
    /// store has no such record.
    async fn get_one<T>(&self, resource: &str, id: &RecordId) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send + 'static;
}

#[async_trait]
impl<P: DataProvider> DataProvider for Arc<P> {
    async fn get_list<T>(&self, resource: &str, pagination: &Pagination) -> Result<Page<T>, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        (**self).get_list(resource, pagination).await
    }

    async fn get_one<T>(&self, resource: &str, id: &RecordId) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        (**self).get_one(resource, id).await
    }
}
