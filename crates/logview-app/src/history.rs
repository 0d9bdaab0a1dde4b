//! Paginated browsing of historical log files.
//!
//! [`HistoryPager`] owns the `(file, page, size, total)` query. Every intent
//! either fails locally without touching the network or returns the
//! [`PageRequest`] that must be fetched. Responses come back tagged with the
//! request they answer and are dropped when the query has moved on.

use logview_client::ContentPage;
use logview_core::prelude::*;
use logview_core::{decode_history_page, LogEntry};

use crate::config::MAX_PAGE_SIZE;

/// Navigation buttons of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    First,
    Prev,
    Next,
    Last,
}

/// The query a content request was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub filename: String,
    pub page: u32,
    pub page_size: u32,
}

/// Current history query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub selected_file: Option<String>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// What happened to a response handed to [`HistoryPager::apply_response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Entries replaced, paging updated.
    Applied,
    /// The query changed since the request was issued.
    Stale,
    /// The request failed; paging reset to a single page.
    Failed,
}

#[derive(Debug, Clone)]
pub struct HistoryPager {
    query: HistoryQuery,
    entries: Vec<LogEntry>,
    loading: bool,
    last_error: Option<String>,
    total_lines: Option<u64>,
    /// Bumped every time a response is applied or fails.
    revision: u64,
}

impl HistoryPager {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: HistoryQuery {
                selected_file: None,
                page_number: 1,
                page_size: page_size.clamp(1, MAX_PAGE_SIZE),
                total_pages: 1,
            },
            entries: Vec::new(),
            loading: false,
            last_error: None,
            total_lines: None,
            revision: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn query(&self) -> &HistoryQuery {
        &self.query
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.query.selected_file.as_deref()
    }

    pub fn page_number(&self) -> u32 {
        self.query.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.query.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.query.total_pages
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn total_lines(&self) -> Option<u64> {
        self.total_lines
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_go_back(&self) -> bool {
        self.query.page_number > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.query.page_number < self.query.total_pages
    }

    /// `Current log: <name>` label for the selection.
    pub fn selection_label(&self) -> Option<String> {
        self.selected_file()
            .map(|name| format!("Current log: {name}"))
    }

    /// The request matching the current query, if a file is selected.
    pub fn current_request(&self) -> Option<PageRequest> {
        self.query.selected_file.as_ref().map(|filename| PageRequest {
            filename: filename.clone(),
            page: self.query.page_number,
            page_size: self.query.page_size,
        })
    }

    // ─────────────────────────────────────────────────────────
    // Intents
    // ─────────────────────────────────────────────────────────

    /// Select a file and fetch its first page.
    pub fn select_file(&mut self, filename: impl Into<String>) -> Result<PageRequest> {
        let filename = filename.into();
        info!("History: selected {}", filename);
        self.query.selected_file = Some(filename);
        self.query.page_number = 1;
        self.fetch_page()
    }

    /// Request the current page.
    ///
    /// # Errors
    ///
    /// [`Error::NoFileSelected`] when nothing is selected. No request is made.
    pub fn fetch_page(&mut self) -> Result<PageRequest> {
        let request = self.current_request().ok_or(Error::NoFileSelected)?;
        self.loading = true;
        Ok(request)
    }

    /// Move to the first, previous, next or last page and re-fetch.
    ///
    /// `Prev`/`Next` at a boundary keep the page unchanged; the re-fetch still
    /// happens.
    pub fn change_page(&mut self, direction: PageDirection) -> Result<PageRequest> {
        let total = self.query.total_pages.max(1);
        let current = self.query.page_number;
        let target = match direction {
            PageDirection::First => 1,
            PageDirection::Prev => current.saturating_sub(1),
            PageDirection::Next => current.saturating_add(1),
            PageDirection::Last => total,
        };
        self.query.page_number = target.clamp(1, total);
        self.fetch_page()
    }

    /// Jump to page `n`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPageNumber`] when `n` is outside `1..=total_pages`. The
    /// page number is unchanged and nothing is fetched.
    pub fn go_to_page(&mut self, n: u32) -> Result<PageRequest> {
        if n < 1 || n > self.query.total_pages {
            debug!(
                "History: rejected page {} (total {})",
                n, self.query.total_pages
            );
            return Err(Error::invalid_page_number(n, self.query.total_pages));
        }
        self.query.page_number = n;
        self.fetch_page()
    }

    /// Parse free-text input and jump to that page.
    pub fn go_to_page_input(&mut self, input: &str) -> Result<PageRequest> {
        let trimmed = input.trim();
        match trimmed.parse::<u32>() {
            Ok(n) => self.go_to_page(n),
            Err(_) => Err(Error::invalid_page_number(trimmed, self.query.total_pages)),
        }
    }

    /// Change the page size, keeping the first visible line on screen.
    ///
    /// `page = floor((page - 1) * old_size / new_size) + 1`, then re-fetch.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPageSize`] for `0` or sizes above the server maximum.
    pub fn change_page_size(&mut self, new_size: u32) -> Result<PageRequest> {
        if new_size == 0 || new_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_page_size(new_size));
        }
        let first_line = u64::from(self.query.page_number.saturating_sub(1))
            * u64::from(self.query.page_size);
        let page = first_line / u64::from(new_size) + 1;
        self.query.page_number = u32::try_from(page).unwrap_or(u32::MAX);
        self.query.page_size = new_size;
        self.fetch_page()
    }

    /// Parse free-text input and change the page size.
    pub fn change_page_size_input(&mut self, input: &str) -> Result<PageRequest> {
        let trimmed = input.trim();
        match trimmed.parse::<u32>() {
            Ok(size) => self.change_page_size(size),
            Err(_) => Err(Error::invalid_page_size(trimmed)),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Responses
    // ─────────────────────────────────────────────────────────

    /// Apply the outcome of `request`.
    pub fn apply_response(
        &mut self,
        request: &PageRequest,
        response: std::result::Result<ContentPage, String>,
    ) -> PageOutcome {
        if self.current_request().as_ref() != Some(request) {
            debug!(
                "History: dropping stale response for {} page {} size {}",
                request.filename, request.page, request.page_size
            );
            return PageOutcome::Stale;
        }

        self.loading = false;
        self.revision += 1;

        match response {
            Ok(page) => {
                self.entries = decode_history_page(&page.logs);
                self.query.total_pages = page.total_pages.max(1);
                if let Some(current) = page.current_page {
                    self.query.page_number = current;
                }
                self.query.page_number = self.query.page_number.clamp(1, self.query.total_pages);
                self.total_lines = page.total_lines;
                self.last_error = None;
                debug!(
                    "History: {} page {}/{} ({} entries)",
                    request.filename,
                    self.query.page_number,
                    self.query.total_pages,
                    self.entries.len()
                );
                PageOutcome::Applied
            }
            Err(error) => {
                warn!("History: failed to load {}: {}", request.filename, error);
                self.query.total_pages = 1;
                self.last_error = Some(error);
                PageOutcome::Failed
            }
        }
    }
}
