//! In-flight Request Deduplication
//!
//! Concurrent callers asking for the same key share one pending future.
//! Entries are dropped as soon as the request settles; nothing is cached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

pub type SharedRequest<V> = Shared<LocalBoxFuture<'static, V>>;

/// Pending requests keyed by resource path
pub struct InFlight<V: Clone + 'static> {
    pending: Rc<RefCell<HashMap<String, SharedRequest<V>>>>,
}

impl<V: Clone + 'static> Clone for InFlight<V> {
    fn clone(&self) -> Self {
        Self { pending: Rc::clone(&self.pending) }
    }
}

impl<V: Clone + 'static> Default for InFlight<V> {
    fn default() -> Self {
        Self { pending: Rc::new(RefCell::new(HashMap::new())) }
    }
}

impl<V: Clone + 'static> InFlight<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the pending request for `key`, or start one with `start`
    pub fn run<F, Fut>(&self, key: &str, start: F) -> SharedRequest<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V> + 'static,
    {
        if let Some(existing) = self.pending.borrow().get(key) {
            log::debug!("[InFlight] Joining pending request {}", key);
            return existing.clone();
        }

        let request = start();
        let pending = Rc::clone(&self.pending);
        let owned_key = key.to_string();
        let shared = async move {
            let value = request.await;
            pending.borrow_mut().remove(&owned_key);
            value
        }
        .boxed_local()
        .shared();

        self.pending.borrow_mut().insert(key.to_string(), shared.clone());
        shared
    }

    /// Number of requests still pending
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_concurrent_requests_share_one_call() {
        let inflight = InFlight::<u32>::new();
        let started = Rc::new(Cell::new(0));

        let make = |started: Rc<Cell<u32>>| {
            move || {
                started.set(started.get() + 1);
                async { 42 }
            }
        };

        let first = inflight.run("/parkings", make(started.clone()));
        let second = inflight.run("/parkings", make(started.clone()));
        assert_eq!(inflight.len(), 1);

        let (a, b) = block_on(futures::future::join(first, second));
        assert_eq!((a, b), (42, 42));
        assert_eq!(started.get(), 1);
        assert!(inflight.is_empty());
    }

    #[test]
    fn test_settled_requests_are_not_cached() {
        let inflight = InFlight::<&'static str>::new();
        let started = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let counter = started.clone();
            let value = block_on(inflight.run("/cars", move || {
                counter.set(counter.get() + 1);
                async { "ok" }
            }));
            assert_eq!(value, "ok");
        }
        assert_eq!(started.get(), 2);
    }

    #[test]
    fn test_distinct_keys_do_not_share() {
        let inflight = InFlight::<String>::new();
        let a = inflight.run("/parkings/1", || async { "one".to_string() });
        let b = inflight.run("/parkings/2", || async { "two".to_string() });
        assert_eq!(inflight.len(), 2);
        assert_eq!(block_on(a), "one");
        assert_eq!(block_on(b), "two");
    }
}
