//! Profile source abstraction
//!
//! The app layer fetches profiles through this trait so the TEA loop and
//! headless runner can be driven by an in-memory source in tests.

use codecracker_core::{ProfileStats, Query, Result};

use crate::client::ApiClient;

/// Something that can resolve a [`Query`] into [`ProfileStats`]
#[trait_variant::make(ProfileSource: Send)]
pub trait LocalProfileSource {
    /// Fetch statistics for one query.
    ///
    /// Every failure is reported through the returned `Result`.
    async fn fetch_profile(&self, query: &Query) -> Result<ProfileStats>;
}

impl ProfileSource for ApiClient {
    async fn fetch_profile(&self, query: &Query) -> Result<ProfileStats> {
        self.request_profile(query).await
    }
}
