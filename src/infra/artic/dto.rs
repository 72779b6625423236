use serde::Deserialize;

use crate::domain::entities::artwork::{ArtworkId, ArtworkRecord, Page, PageNumber};
use crate::usecase::ports::source::FetchError;

#[derive(Debug, Clone, Deserialize)]
pub struct ArtworksResponse {
    pub data: Vec<ArtworkDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationDto {
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkDto {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl From<ArtworkDto> for ArtworkRecord {
    fn from(dto: ArtworkDto) -> Self {
        ArtworkRecord {
            id: ArtworkId(dto.id),
            title: dto.title,
            place_of_origin: dto.place_of_origin,
            artist_display: dto.artist_display,
            inscriptions: dto.inscriptions,
            date_start: dto.date_start,
            date_end: dto.date_end,
        }
    }
}

impl ArtworksResponse {
    pub fn into_page(self, page_number: PageNumber) -> Page {
        Page::new(
            page_number,
            self.data.into_iter().map(ArtworkRecord::from).collect(),
            self.pagination.total,
        )
    }
}

pub fn decode_page(body: &str, page_number: PageNumber) -> Result<Page, FetchError> {
    let response: ArtworksResponse =
        serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(response.into_page(page_number))
}
