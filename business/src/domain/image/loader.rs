use std::collections::HashMap;

/// Lifecycle of one image slot on a rendered page. A slot starts blank,
/// becomes observed when it scrolls into the viewport, is requested at
/// most once per locator per session, and ends loaded or failed. A
/// failed slot stays failed until an explicit retry re-arms it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    Unobserved,
    Observed,
    Requested,
    Loaded(String),
    Failed,
}

/// Session-local driver for the lazy image loading protocol. Keyed by
/// locator, so several slots showing the same image share one request
/// and one payload.
#[derive(Debug, Default)]
pub struct SessionImageLoader {
    slots: HashMap<String, SlotState>,
}

impl SessionImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, locator: &str) -> SlotState {
        self.slots
            .get(locator)
            .cloned()
            .unwrap_or(SlotState::Unobserved)
    }

    /// The slot for `locator` became visible. A no-op for slots that are
    /// already observed, in flight, loaded, or failed.
    pub fn enters_viewport(&mut self, locator: &str) {
        let state = self
            .slots
            .entry(locator.to_string())
            .or_insert(SlotState::Unobserved);
        if *state == SlotState::Unobserved {
            *state = SlotState::Observed;
        }
    }

    /// Drains every observed slot into the requested state and returns
    /// the locators to fetch. Each locator is returned exactly once per
    /// observation, however many times slots re-enter the viewport.
    pub fn pending_requests(&mut self) -> Vec<String> {
        let mut requests = Vec::new();
        for (locator, state) in &mut self.slots {
            if *state == SlotState::Observed {
                *state = SlotState::Requested;
                requests.push(locator.clone());
            }
        }
        requests.sort();
        requests
    }

    /// A fetch for `locator` finished with `payload`.
    pub fn complete(&mut self, locator: &str, payload: String) {
        if let Some(state) = self.slots.get_mut(locator) {
            if *state == SlotState::Requested {
                *state = SlotState::Loaded(payload);
            }
        }
    }

    /// A fetch for `locator` failed. The slot is terminal until retried.
    pub fn fail(&mut self, locator: &str) {
        if let Some(state) = self.slots.get_mut(locator) {
            if *state == SlotState::Requested {
                *state = SlotState::Failed;
            }
        }
    }

    /// Re-arms a failed slot so the next request drain fetches it again.
    pub fn retry(&mut self, locator: &str) {
        if let Some(state) = self.slots.get_mut(locator) {
            if *state == SlotState::Failed {
                *state = SlotState::Observed;
            }
        }
    }

    /// The payload for a loaded locator, if the session already has it.
    pub fn payload(&self, locator: &str) -> Option<&str> {
        match self.slots.get(locator) {
            Some(SlotState::Loaded(payload)) => Some(payload),
            _ => None,
        }
    }
}
