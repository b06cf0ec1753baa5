use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    /// Requests started through [`AppGlobalContext::begin_request`] and not finished yet.
    pub in_flight: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            in_flight: RwSignal::new(0),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn begin_request(&self) {
        self.in_flight.update(|n| *n += 1);
    }

    pub fn end_request(&self) {
        self.in_flight.update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
