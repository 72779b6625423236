use log::{debug, error, info, warn};

use crate::domain::entities::artwork::{ArtworkRecord, Page, PageNumber};
use crate::usecase::ports::source::FetchError;
#[cfg(test)]
use crate::usecase::ports::source::PageDataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading(PageNumber),
}

/// Handle for one in-flight fetch. Only the most recently issued ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: PageNumber,
}

impl FetchTicket {
    pub fn page(&self) -> PageNumber {
        self.page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Applied,
    Failed,
    Superseded,
}

/// Page navigation state. Owns the displayed page; never touches selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableController {
    state: LoadState,
    page: Page,
    issued: u64,
}

impl TableController {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading(_))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn records(&self) -> &[ArtworkRecord] {
        &self.page.records
    }

    pub fn total_records(&self) -> u64 {
        self.page.total_records
    }

    pub fn current_page(&self) -> PageNumber {
        self.page.page_number
    }

    /// Starts a fetch for `target`. Returns `None` when that page is already loading.
    pub fn request_page(&mut self, target: PageNumber) -> Option<FetchTicket> {
        if self.state == LoadState::Loading(target) {
            debug!("page {target} already loading, ignoring duplicate request");
            return None;
        }
        self.issued += 1;
        self.state = LoadState::Loading(target);
        info!("fetching page {target}");
        Some(FetchTicket {
            seq: self.issued,
            page: target,
        })
    }

    /// Applies a settled fetch. Failures keep the displayed page as it was.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page, FetchError>,
    ) -> SettleOutcome {
        if ticket.seq != self.issued {
            warn!(
                "dropping response for page {} (request #{} superseded by #{})",
                ticket.page, ticket.seq, self.issued
            );
            return SettleOutcome::Superseded;
        }
        self.state = LoadState::Idle;
        match result {
            Ok(page) => {
                info!(
                    "loaded page {} ({} records, {} total)",
                    page.page_number,
                    page.len(),
                    page.total_records
                );
                self.page = page;
                SettleOutcome::Applied
            }
            Err(err) => {
                error!("error fetching page {}: {err}", ticket.page);
                SettleOutcome::Failed
            }
        }
    }

    /// Request, fetch and settle in one step, for driving the controller without a UI.
    #[cfg(test)]
    pub async fn load(
        &mut self,
        source: &dyn PageDataSource,
        target: PageNumber,
    ) -> Option<SettleOutcome> {
        let ticket = self.request_page(target)?;
        let result = source.fetch(ticket.page()).await;
        Some(self.settle(ticket, result))
    }

    pub fn page_count(&self, page_size: u32) -> u32 {
        page_count(self.page.total_records, page_size)
    }

    pub fn page_report(&self, page_size: u32) -> String {
        page_report(
            self.page.page_number,
            page_size,
            self.page.len(),
            self.page.total_records,
        )
    }
}

pub fn page_count(total_records: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_records.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

pub fn page_report(page: PageNumber, page_size: u32, loaded: usize, total_records: u64) -> String {
    if loaded == 0 {
        return format!("Showing 0 to 0 of {total_records} entries");
    }
    let first = u64::from(page.get() - 1) * u64::from(page_size) + 1;
    let last = first + loaded as u64 - 1;
    format!("Showing {first} to {last} of {total_records} entries")
}
