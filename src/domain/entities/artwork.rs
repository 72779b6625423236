use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(pub i64);

impl From<i64> for ArtworkId {
    fn from(value: i64) -> Self {
        ArtworkId(value)
    }
}

impl From<ArtworkId> for i64 {
    fn from(value: ArtworkId) -> Self {
        value.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based page index as understood by the remote listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    #[allow(dead_code)]
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(PageNumber(value))
    }

    /// Paginator widgets report zero-based indexes.
    pub fn from_zero_based(index: usize) -> Self {
        let value = u32::try_from(index).unwrap_or(u32::MAX - 1);
        PageNumber(value.saturating_add(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        PageNumber::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One artwork row. Optional fields are kept exactly as the remote sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
}

impl ArtworkRecord {
    #[allow(dead_code)]
    pub fn new(id: i64) -> Self {
        Self {
            id: ArtworkId(id),
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub records: Vec<ArtworkRecord>,
    pub total_records: u64,
    pub page_number: PageNumber,
}

impl Page {
    pub fn new(page_number: PageNumber, records: Vec<ArtworkRecord>, total_records: u64) -> Self {
        Self {
            records,
            total_records,
            page_number,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[allow(dead_code)]
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.records.iter().map(|record| record.id)
    }
}
