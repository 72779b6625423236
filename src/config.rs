use log::LevelFilter;

use crate::domain::entities::artwork::PageNumber;

pub const PAGE_SIZE: u32 = 10;
pub const ARTWORK_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub fields: Vec<String>,
    pub default_toggle_count: i64,
    pub page_link_window: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.artic.edu/api/v1".to_string(),
            page_size: PAGE_SIZE,
            fields: ARTWORK_FIELDS.iter().map(|field| field.to_string()).collect(),
            default_toggle_count: 1,
            page_link_window: 5,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// `None` when logging is switched off.
    #[allow(dead_code)]
    pub fn max_level(&self) -> Option<log::Level> {
        self.log_level.to_level()
    }

    pub fn artworks_url(&self, page: PageNumber) -> String {
        let mut url = format!(
            "{}/artworks?page={}&limit={}",
            self.api_base_url.trim_end_matches('/'),
            page,
            self.page_size
        );
        if !self.fields.is_empty() {
            url.push_str("&fields=");
            url.push_str(&self.fields.join(","));
        }
        url
    }
}
