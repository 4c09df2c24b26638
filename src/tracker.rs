//! Active-category tracking for the catalog page.
//!
//! Every rendered page opens its own session holding one state machine per
//! product group it shows. A group becomes active once its visible ratio
//! reaches the threshold, and entering that state publishes its category id
//! to the session's [`CategoryStore`] read by the top bar. Leaving the active
//! state publishes nothing, so the most recent group to become active wins.

use std::{
    collections::HashMap,
    sync::Arc,
    time::Instant,
};

use rand::Rng;
use thiserror::Error;
use tokio::sync::{Mutex, watch};

/// Visible fraction of a group required to mark it active.
pub const ACTIVE_THRESHOLD: f64 = 0.4;

/// Browsers report a threshold crossing with a ratio a hair below the
/// threshold (0.3999 for 0.4).
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Oldest sessions are evicted past this many open pages.
pub const MAX_SESSIONS: usize = 1024;

#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("intersection ratio {0} is outside [0, 1]")]
    InvalidRatio(f64),

    #[error("threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    #[error("category {0} is not shown on this page")]
    UnknownCategory(i32),

    #[error("unknown catalog session")]
    UnknownSession,
}

fn check_unit(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// Shared UI state holding the category currently highlighted in the top bar.
#[derive(Clone, Debug)]
pub struct CategoryStore {
    tx: Arc<watch::Sender<Option<i32>>>,
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn active_id(&self) -> Option<i32> {
        *self.tx.borrow()
    }

    pub fn set_active_id(&self, category_id: i32) {
        self.tx.send_replace(Some(category_id));
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<i32>> {
        self.tx.subscribe()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    Inactive,
    Active,
}

/// Visibility state machine for a single product group.
#[derive(Debug, Clone)]
pub struct GroupTracker {
    category_id: i32,
    threshold: f64,
    state: GroupState,
}

impl GroupTracker {
    pub fn new(category_id: i32) -> Self {
        Self {
            category_id,
            threshold: ACTIVE_THRESHOLD,
            state: GroupState::Inactive,
        }
    }

    pub fn with_threshold(category_id: i32, threshold: f64) -> Result<Self, TrackerError> {
        if !check_unit(threshold) {
            return Err(TrackerError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            ..Self::new(category_id)
        })
    }

    pub fn category_id(&self) -> i32 {
        self.category_id
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    /// Feed a new visible ratio. Returns `true` when the group just became
    /// active and its category was written to `store`.
    pub fn observe(&mut self, ratio: f64, store: &CategoryStore) -> Result<bool, TrackerError> {
        if !check_unit(ratio) {
            return Err(TrackerError::InvalidRatio(ratio));
        }

        // A zero ratio never counts as intersecting, even with a zero threshold.
        let intersecting = ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.threshold;
        match (self.state, intersecting) {
            (GroupState::Inactive, true) => {
                self.state = GroupState::Active;
                store.set_active_id(self.category_id);
                tracing::debug!(category_id = self.category_id, ratio, "category became active");
                Ok(true)
            }
            (GroupState::Active, false) => {
                self.state = GroupState::Inactive;
                Ok(false)
            }
            _ => Ok(false),
        }
    }
}

/// Result of feeding one intersection report into [`CategoryTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub category_id: i32,
    pub fired: bool,
    pub active_category_id: Option<i32>,
}

#[derive(Debug)]
struct PageSession {
    groups: HashMap<i32, GroupTracker>,
    store: CategoryStore,
    last_seen: Instant,
}

/// Group trackers of every open catalog page, keyed by page session.
#[derive(Clone, Debug)]
pub struct CategoryTracker {
    sessions: Arc<Mutex<HashMap<String, PageSession>>>,
    max_sessions: usize,
}

impl Default for CategoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryTracker {
    pub fn new() -> Self {
        Self::with_max_sessions(MAX_SESSIONS)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Register a page showing the given category groups and return its
    /// session id.
    pub async fn open_session(&self, category_ids: &[i32]) -> String {
        let session_id = format!("{:032x}", rand::rng().random::<u128>());
        let session = PageSession {
            groups: category_ids
                .iter()
                .map(|id| (*id, GroupTracker::new(*id)))
                .collect(),
            store: CategoryStore::new(),
            last_seen: Instant::now(),
        };

        let mut sessions = self.sessions.lock().await;
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    tracing::debug!(session_id = %id, "evicted catalog session");
                }
                None => break,
            }
        }
        sessions.insert(session_id.clone(), session);
        session_id
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn active_id(&self, session_id: &str) -> Result<Option<i32>, TrackerError> {
        let sessions = self.sessions.lock().await;
        let session = sessions
            .get(session_id)
            .ok_or(TrackerError::UnknownSession)?;
        Ok(session.store.active_id())
    }

    pub async fn subscribe(
        &self,
        session_id: &str,
    ) -> Result<watch::Receiver<Option<i32>>, TrackerError> {
        let sessions = self.sessions.lock().await;
        let session = sessions
            .get(session_id)
            .ok_or(TrackerError::UnknownSession)?;
        Ok(session.store.subscribe())
    }

    pub async fn observe(
        &self,
        session_id: &str,
        category_id: i32,
        ratio: f64,
    ) -> Result<Observation, TrackerError> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or(TrackerError::UnknownSession)?;
        session.last_seen = Instant::now();

        let group = session
            .groups
            .get_mut(&category_id)
            .ok_or(TrackerError::UnknownCategory(category_id))?;
        let fired = group.observe(ratio, &session.store)?;

        Ok(Observation {
            category_id,
            fired,
            active_category_id: session.store.active_id(),
        })
    }
}
