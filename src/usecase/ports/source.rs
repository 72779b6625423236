use async_trait::async_trait;

use crate::domain::entities::artwork::{Page, PageNumber};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Remote paginated listing. Fetches run on the UI event loop, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait PageDataSource {
    async fn fetch(&self, page: PageNumber) -> Result<Page, FetchError>;
}
