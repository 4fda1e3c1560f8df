//! Fetch State
//!
//! `idle -> loading -> {loaded, failed}` for every backend read, plus a
//! sequence guard so a slow, older response never overwrites a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Clone> LoadState<T> {
    pub fn cloned(&self) -> Option<T> {
        self.value().cloned()
    }
}

/// Ticket handed out before a fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Latest-request-wins guard
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let seq = RequestSeq::new();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));

        let shared = seq.clone();
        let third = shared.next();
        assert!(!seq.is_current(second));
        assert!(seq.is_current(third));
    }

    #[test]
    fn test_load_state_accessors() {
        let idle: LoadState<Vec<u32>> = LoadState::default();
        assert!(idle.is_loading());
        assert!(idle.value().is_none());

        let loaded = LoadState::from_result(Ok(vec![1, 2]));
        assert_eq!(loaded.cloned(), Some(vec![1, 2]));
        assert!(!loaded.is_loading());

        let failed: LoadState<Vec<u32>> = LoadState::from_result(Err(ApiError::Network("down".into())));
        assert!(failed.is_error());
        assert!(!failed.is_loading());
    }
}
