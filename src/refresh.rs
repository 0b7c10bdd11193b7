//! Roster refresh coordination.
//!
//! The staff roster is fetched from an external [`RosterSource`] on demand
//! and periodically. Refreshes may overlap; each trigger takes a
//! generation ticket and a completed fetch is published only if its ticket
//! is still the newest issued. A stale fetch that resolves late can
//! therefore never overwrite a roster requested more recently
//! (last-write-wins by trigger time, not completion time).
//!
//! Fetch failures are logged and leave the published roster unchanged.
//! There are no retries or timeouts; the periodic task stops when its
//! cancellation token fires.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::Interviewer;

/// Shared, immutable roster snapshot.
pub type Roster = Arc<Vec<Interviewer>>;

/// External supplier of the staff roster.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetches all staff members. Filtering to interview-capable roles
    /// happens in the refresher.
    async fn fetch_staff_roster(&self) -> Result<Vec<Interviewer>>;
}

/// Result of one refresh trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Roster published.
    Applied { generation: u64, interviewers: usize },
    /// A newer trigger was issued before this fetch resolved.
    Superseded { generation: u64 },
    /// Fetch failed; the previous roster stays in place.
    Failed { generation: u64 },
}

/// Single-flight roster refresher.
pub struct RosterRefresher {
    source: Arc<dyn RosterSource>,
    issued: AtomicU64,
    // Guards check-then-publish; holds the last applied generation.
    applied: Mutex<u64>,
    roster_tx: watch::Sender<Roster>,
}

impl RosterRefresher {
    /// Creates a refresher with an empty roster.
    pub fn new(source: Arc<dyn RosterSource>) -> Self {
        let (roster_tx, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            source,
            issued: AtomicU64::new(0),
            applied: Mutex::new(0),
            roster_tx,
        }
    }

    /// Receiver notified whenever a new roster is published.
    pub fn subscribe(&self) -> watch::Receiver<Roster> {
        self.roster_tx.subscribe()
    }

    /// Most recently published roster.
    pub fn current(&self) -> Roster {
        self.roster_tx.borrow().clone()
    }

    /// Newest generation ticket issued so far.
    pub fn latest_generation(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Generation of the currently published roster (0 = none yet).
    pub fn applied_generation(&self) -> u64 {
        *self.applied.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches the roster and publishes it unless superseded.
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = match self.source.fetch_staff_roster().await {
            Ok(staff) => staff,
            Err(e) => {
                log::warn!("roster refresh #{generation} failed, keeping previous roster: {e}");
                return RefreshOutcome::Failed { generation };
            }
        };

        let roster: Vec<Interviewer> = fetched
            .into_iter()
            .filter(|i| i.role.is_interview_capable())
            .collect();

        let mut applied = self.applied.lock().unwrap_or_else(PoisonError::into_inner);
        if generation != self.issued.load(Ordering::SeqCst) {
            log::debug!(
                "roster refresh #{generation} superseded by #{}",
                self.issued.load(Ordering::SeqCst)
            );
            return RefreshOutcome::Superseded { generation };
        }

        let interviewers = roster.len();
        *applied = generation;
        self.roster_tx.send_replace(Arc::new(roster));
        log::debug!("roster refresh #{generation} applied: {interviewers} interviewers");

        RefreshOutcome::Applied {
            generation,
            interviewers,
        }
    }
}

/// Spawns a task that refreshes the roster every `period` until
/// `shutdown` is cancelled. The first refresh runs immediately.
pub fn spawn_periodic_refresh(
    refresher: Arc<RosterRefresher>,
    period: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        log::info!("starting roster refresh every {}s", period.as_secs());
        let mut tick = tokio::time::interval(period);
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tick.tick() => {
                    // An in-flight fetch is dropped on teardown, never published.
                    tokio::select! {
                        biased;
                        _ = shutdown.cancelled() => break,
                        _ = refresher.refresh() => {}
                    }
                }
            }
        }
        log::info!("roster refresh stopped");
    })
}
