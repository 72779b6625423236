use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::AppConfig;
use crate::domain::entities::artwork::{Page, PageNumber};
use crate::infra::artic::dto::decode_page;
use crate::usecase::ports::source::{FetchError, PageDataSource};

/// `PageDataSource` backed by the Art Institute of Chicago artworks listing.
#[derive(Clone)]
pub struct ArticClient {
    http: Client,
    config: AppConfig,
}

impl ArticClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl PageDataSource for ArticClient {
    async fn fetch(&self, page: PageNumber) -> Result<Page, FetchError> {
        let url = self.config.artworks_url(page);
        debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode_page(&body, page)
    }
}
