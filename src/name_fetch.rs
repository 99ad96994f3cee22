//! Random-name button: fetch a name from the server into the name input.
//!
//! Overlapping clicks are sequenced through a [`RequestLedger`]. Every click
//! takes a ticket and only the response for the newest ticket is written, so
//! a slow early response can never overwrite a later one.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::net::api::fetch_random_name;

#[cfg(test)]
#[path = "name_fetch_test.rs"]
mod name_fetch_test;

/// Remove every `"` from a response body.
#[must_use]
pub fn strip_quotes(raw: &str) -> String {
    raw.replace('"', "")
}

/// Hands out request tickets and remembers which one is newest.
#[derive(Debug, Default)]
pub struct RequestLedger {
    latest: Cell<u64>,
    retired: Cell<bool>,
}

impl RequestLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request. Supersedes every ticket issued before it.
    pub fn issue(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    /// Whether a response for `ticket` may still be applied.
    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        !self.retired.get() && ticket == self.latest.get()
    }

    /// Discard every outstanding and future response.
    pub fn retire(&self) {
        self.retired.set(true);
    }
}

/// Mounted click handler. Dropping it removes the listener and discards any
/// response still in flight.
pub struct NameFetcher {
    ledger: Rc<RequestLedger>,
    _click: EventListener,
}

impl NameFetcher {
    #[must_use]
    pub fn mount(trigger: &Element, input: HtmlInputElement, endpoint: String) -> Self {
        let ledger = Rc::new(RequestLedger::new());
        let click_ledger = Rc::clone(&ledger);
        let click = EventListener::new(trigger, "click", move |_event| {
            let ticket = click_ledger.issue();
            let ledger = Rc::clone(&click_ledger);
            let input = input.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                match fetch_random_name(&endpoint).await {
                    Ok(raw) if ledger.is_current(ticket) => input.set_value(&strip_quotes(&raw)),
                    Ok(_) => log::debug!("dropping superseded random name (request {ticket})"),
                    Err(err) => log::warn!("random name not updated: {err}"),
                }
            });
        });
        Self {
            ledger,
            _click: click,
        }
    }
}

impl Drop for NameFetcher {
    fn drop(&mut self) {
        self.ledger.retire();
    }
}
