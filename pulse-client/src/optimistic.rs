//! Optimistic membership toggle
//!
//! Generic over the membership key and the backing add/remove operations.
//! A toggle flips the local membership immediately, confirms against the
//! backend, and reverts the flip on failure. Observers always see a
//! definite in-or-out answer; there is no visible pending state.
//!
//! A key with an in-flight request rejects further toggles until the
//! request resolves; distinct keys toggle concurrently without
//! interference.

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Mutex;

/// The add/remove operations backing a toggle set.
#[async_trait]
pub trait ToggleBackend<K>: Send + Sync {
    async fn add(&self, key: &K) -> ClientResult<()>;
    async fn remove(&self, key: &K) -> ClientResult<()>;
}

/// Outcome of one toggle.
#[derive(Debug)]
pub enum Toggle {
    /// Membership added and confirmed
    Added,
    /// Membership removed and confirmed
    Removed,
    /// Backend refused; the optimistic flip was reverted
    RolledBack(ClientError),
    /// A request for this key is still outstanding; nothing changed
    InFlight,
}

struct State<K> {
    members: HashSet<K>,
    in_flight: HashSet<K>,
}

/// Set of keys with optimistic toggle semantics.
pub struct OptimisticSet<K, B> {
    state: Mutex<State<K>>,
    backend: B,
}

impl<K, B> OptimisticSet<K, B>
where
    K: Eq + Hash + Clone + Send + Sync,
    B: ToggleBackend<K>,
{
    /// Build the set from server-confirmed membership.
    pub fn new(members: impl IntoIterator<Item = K>, backend: B) -> Self {
        Self {
            state: Mutex::new(State {
                members: members.into_iter().collect(),
                in_flight: HashSet::new(),
            }),
            backend,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State<K>> {
        self.state.lock().expect("toggle state poisoned")
    }

    /// Current (optimistic) membership of one key.
    pub fn contains(&self, key: &K) -> bool {
        self.lock().members.contains(key)
    }

    /// Current (optimistic) membership, for rendering.
    pub fn snapshot(&self) -> HashSet<K> {
        self.lock().members.clone()
    }

    /// Flip membership of `key`, confirm with the backend, revert on
    /// failure. The lock is never held across the network call.
    pub async fn toggle(&self, key: K) -> Toggle {
        let adding = {
            let mut state = self.lock();
            if state.in_flight.contains(&key) {
                return Toggle::InFlight;
            }
            let adding = !state.members.contains(&key);
            if adding {
                state.members.insert(key.clone());
            } else {
                state.members.remove(&key);
            }
            state.in_flight.insert(key.clone());
            adding
        };

        let result = if adding {
            self.backend.add(&key).await
        } else {
            self.backend.remove(&key).await
        };

        let mut state = self.lock();
        state.in_flight.remove(&key);
        match result {
            Ok(()) => {
                if adding {
                    Toggle::Added
                } else {
                    Toggle::Removed
                }
            }
            Err(error) => {
                if adding {
                    state.members.remove(&key);
                } else {
                    state.members.insert(key);
                }
                Toggle::RolledBack(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Backend that fails on demand and can hold one key's requests open.
    #[derive(Default)]
    struct ScriptedBackend {
        fail: std::sync::atomic::AtomicBool,
        calls: AtomicUsize,
        held_key: Option<(i64, Arc<Notify>)>,
    }

    impl ScriptedBackend {
        fn failing() -> Self {
            let backend = Self::default();
            backend.fail.store(true, Ordering::SeqCst);
            backend
        }

        fn holding_key(key: i64, notify: Arc<Notify>) -> Self {
            Self {
                held_key: Some((key, notify)),
                ..Self::default()
            }
        }

        async fn respond(&self, key: i64) -> ClientResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some((held, notify)) = &self.held_key {
                if *held == key {
                    notify.notified().await;
                }
            }
            if self.fail.load(Ordering::SeqCst) {
                Err(ClientError::Status {
                    status: 500,
                    message: "backend down".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ToggleBackend<i64> for Arc<ScriptedBackend> {
        async fn add(&self, key: &i64) -> ClientResult<()> {
            self.respond(*key).await
        }
        async fn remove(&self, key: &i64) -> ClientResult<()> {
            self.respond(*key).await
        }
    }

    #[tokio::test]
    async fn toggle_twice_round_trips() {
        let backend = Arc::new(ScriptedBackend::default());
        let set = OptimisticSet::new([1_i64], backend.clone());

        assert!(!set.contains(&42));
        assert!(matches!(set.toggle(42).await, Toggle::Added));
        assert!(set.contains(&42));
        assert!(matches!(set.toggle(42).await, Toggle::Removed));
        assert!(!set.contains(&42));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_add_rolls_back_and_surfaces_error() {
        let backend = Arc::new(ScriptedBackend::failing());
        let set = OptimisticSet::new(std::iter::empty(), backend);

        match set.toggle(42).await {
            Toggle::RolledBack(error) => {
                assert!(matches!(error, ClientError::Status { status: 500, .. }))
            }
            other => panic!("expected rollback, got {other:?}"),
        }
        assert!(!set.contains(&42));
    }

    #[tokio::test]
    async fn failed_remove_restores_membership() {
        let backend = Arc::new(ScriptedBackend::failing());
        let set = OptimisticSet::new([42_i64], backend);

        assert!(matches!(set.toggle(42).await, Toggle::RolledBack(_)));
        assert!(set.contains(&42));
    }

    #[tokio::test]
    async fn second_toggle_on_in_flight_key_is_rejected() {
        let gate = Arc::new(Notify::new());
        let backend = Arc::new(ScriptedBackend::holding_key(42, gate.clone()));
        let set = Arc::new(OptimisticSet::new(std::iter::empty::<i64>(), backend.clone()));

        let first = tokio::spawn({
            let set = set.clone();
            async move { set.toggle(42).await }
        });

        // wait until the first request reaches the backend
        while backend.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        // optimistic state is already flipped, but a second toggle on the
        // same key is refused
        assert!(set.contains(&42));
        assert!(matches!(set.toggle(42).await, Toggle::InFlight));

        // a different key stays independent while 42 is outstanding
        assert!(matches!(set.toggle(7).await, Toggle::Added));

        gate.notify_one();
        assert!(matches!(first.await.unwrap(), Toggle::Added));
        assert!(set.contains(&42));
        assert!(set.contains(&7));
    }
}
