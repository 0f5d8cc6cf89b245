//! Paged listing and debounced search over the remote directory.
//!
//! [`DirectoryBrowser`] is a plain state machine: every transition that needs
//! data returns a [`FetchRequest`], and the caller reports the outcome back
//! through [`DirectoryBrowser::complete`]. Requests carry a [`RequestTag`];
//! only the most recently issued one may change the state, so a slow response
//! to a superseded query is dropped instead of overwriting newer results.
//!
//! Both listing and search use the same cursor: the next offset is
//! `skip + limit` of the last applied page.

pub mod debounce;
pub mod request;

use std::time::{Duration, Instant};

use tracing::debug;

pub use debounce::Debouncer;
pub use request::{FetchRequest, Merge, RequestTag};

use crate::api::DirectoryService;
use crate::config::Config;
use crate::error::AppResult;
use crate::model::{Contact, DirectoryPage};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Browsing,
    Searching,
    LoadingMore,
    Refreshing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Searching,
}

/// Result of handing a completed fetch back to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// The request had been superseded; nothing changed.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    /// Accumulated contacts, in server order.
    pub contacts: Vec<Contact>,
    pub total: u64,
    pub next_skip: u64,
    pub has_more: bool,
    pub mode: Mode,
    /// Query text as typed, updated on every keystroke.
    pub query: String,
    /// Search term the accumulated results belong to.
    pub active_query: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            contacts: Vec::new(),
            total: 0,
            next_skip: 0,
            has_more: false,
            mode: Mode::Browsing,
            query: String::new(),
            active_query: None,
            loading: false,
            error: None,
        }
    }
}

impl BrowserState {
    fn reset_results(&mut self) {
        self.contacts.clear();
        self.total = 0;
        self.next_skip = 0;
        self.has_more = false;
    }
}

pub struct DirectoryBrowser {
    state: BrowserState,
    phase: Phase,
    page_limit: u64,
    debouncer: Debouncer<String>,
    last_tag: u64,
    in_flight: Option<(RequestTag, Merge)>,
    /// Set when the first listing page failed to arrive.
    needs_reload: bool,
    gender_filter: Option<String>,
}

impl DirectoryBrowser {
    pub fn new(page_limit: u64, debounce: Duration) -> Self {
        Self {
            state: BrowserState::default(),
            phase: Phase::Idle,
            page_limit: page_limit.max(1),
            debouncer: Debouncer::new(debounce),
            last_tag: 0,
            in_flight: None,
            needs_reload: false,
            gender_filter: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.page_limit, config.search_debounce)
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// When the pending search (if any) becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// First listing fetch. Valid from `Idle`, or again after the first
    /// listing page failed.
    pub fn start(&mut self) -> Option<FetchRequest> {
        let retry = self.needs_reload && self.state.mode == Mode::Browsing;
        if self.phase != Phase::Idle && !retry {
            return None;
        }
        Some(self.issue(None, 0, Merge::Replace, Phase::Browsing))
    }

    /// Records a query edit. A non-empty query is held back until the
    /// debounce window passes (see [`poll`](Self::poll)). Clearing the query
    /// while searching (or after the listing failed to load) returns to
    /// listing immediately.
    pub fn set_query(&mut self, text: &str, now: Instant) -> Option<FetchRequest> {
        self.state.query = text.to_string();
        match validation::trim_query(text) {
            Some(query) => {
                self.debouncer.schedule(query, now);
                None
            }
            None => {
                self.debouncer.cancel();
                if self.state.mode != Mode::Searching && !self.needs_reload {
                    return None;
                }
                self.state.mode = Mode::Browsing;
                self.state.active_query = None;
                self.state.reset_results();
                Some(self.issue(None, 0, Merge::Replace, Phase::Browsing))
            }
        }
    }

    /// Issues the debounced search once the query has been quiet long enough.
    pub fn poll(&mut self, now: Instant) -> Option<FetchRequest> {
        let query = self.debouncer.fire(now)?;
        self.state.mode = Mode::Searching;
        self.state.active_query = Some(query.clone());
        Some(self.issue(Some(query), 0, Merge::Replace, Phase::Searching))
    }

    /// Next page, when more exist and nothing is in flight.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if self.in_flight.is_some() || !self.state.has_more {
            return None;
        }
        let query = match self.state.mode {
            Mode::Searching => self.state.active_query.clone(),
            Mode::Browsing => None,
        };
        let skip = self.state.next_skip;
        Some(self.issue(query, skip, Merge::Append, Phase::LoadingMore))
    }

    /// Drops accumulated results and refetches the first page for whatever
    /// the query box currently holds.
    pub fn refresh(&mut self) -> FetchRequest {
        self.debouncer.cancel();
        let query = validation::trim_query(&self.state.query);
        self.state.mode = if query.is_some() {
            Mode::Searching
        } else {
            Mode::Browsing
        };
        self.state.active_query = query.clone();
        self.state.reset_results();
        self.issue(query, 0, Merge::Replace, Phase::Refreshing)
    }

    /// Applies the outcome of a previously issued request. Completions for
    /// anything but the latest request are ignored.
    pub fn complete(&mut self, tag: RequestTag, result: AppResult<DirectoryPage>) -> Completion {
        let merge = match self.in_flight {
            Some((current, merge)) if current == tag => merge,
            _ => {
                debug!(%tag, "discarding stale response");
                return Completion::Stale;
            }
        };
        self.in_flight = None;
        self.state.loading = false;
        self.phase = match self.state.mode {
            Mode::Browsing => Phase::Browsing,
            Mode::Searching => Phase::Searching,
        };

        match result {
            Ok(page) => {
                self.state.total = page.total;
                self.state.next_skip = page.next_skip();
                self.state.has_more = page.has_more();
                match merge {
                    Merge::Replace => self.state.contacts = page.items,
                    Merge::Append => self.state.contacts.extend(page.items),
                }
                self.state.error = None;
                debug!(
                    %tag,
                    shown = self.state.contacts.len(),
                    total = self.state.total,
                    has_more = self.state.has_more,
                    "page applied"
                );
                Completion::Applied
            }
            Err(e) => {
                debug!(%tag, error = %e, "fetch failed");
                self.state.error = Some(e.to_string());
                // Retained rows belong to a different listing; only a
                // refresh may continue from here.
                if merge == Merge::Replace {
                    self.state.has_more = false;
                    self.needs_reload = self.state.mode == Mode::Browsing;
                }
                Completion::Failed
            }
        }
    }

    /// Executes `request` synchronously and applies the outcome.
    pub fn run(&mut self, request: FetchRequest, service: &dyn DirectoryService) -> Completion {
        let result = request.execute(service);
        self.complete(request.tag, result)
    }

    /// Restricts `visible_contacts` to one gender; None shows everyone.
    pub fn set_gender_filter(&mut self, gender: Option<&str>) {
        self.gender_filter = gender.and_then(validation::trim_query);
    }

    pub fn gender_filter(&self) -> Option<&str> {
        self.gender_filter.as_deref()
    }

    pub fn visible_contacts(&self) -> Vec<&Contact> {
        crate::queries::contact_queries::filter_by_gender(
            &self.state.contacts,
            self.gender_filter.as_deref(),
        )
    }

    fn issue(&mut self, query: Option<String>, skip: u64, merge: Merge, phase: Phase) -> FetchRequest {
        self.last_tag += 1;
        let tag = RequestTag(self.last_tag);
        self.in_flight = Some((tag, merge));
        self.needs_reload = false;
        self.phase = phase;
        self.state.loading = true;
        self.state.error = None;
        debug!(%tag, ?query, skip, ?phase, "fetch issued");
        FetchRequest {
            tag,
            query,
            skip,
            limit: self.page_limit,
            merge,
        }
    }
}
