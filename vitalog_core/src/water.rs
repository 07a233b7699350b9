//! The water ledger: append-only intake entries with a goal ceiling.
//!
//! Unlike meals, water additions are checked against the daily goal: an
//! addition that would push the total past the goal is rejected and raises
//! a transient warning that self-clears after a fixed display lifetime.
//! The warning is ephemeral UI state and is never serialized.

use crate::WaterEntry;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a goal-exceeded warning stays visible
const WARNING_LIFETIME_SECONDS: i64 = 3;

/// Outcome of a water addition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaterAdd {
    /// Entry appended to the ledger
    Added,
    /// Addition would exceed the goal; ledger unchanged, warning raised
    GoalExceeded,
}

/// Ordered collection of water entries with a goal-ceiling check.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WaterLedger {
    entries: Vec<WaterEntry>,

    // Transient warning state; not part of the durable ledger.
    #[serde(skip)]
    warning_raised_at: Option<DateTime<Utc>>,
}

impl WaterLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a water entry, enforcing the goal ceiling.
    ///
    /// `amount_ml` must be positive; callers guard this via
    /// [`parse_custom_amount`] or fixed quick-add buttons. If the
    /// projected total would exceed `goal_ml` the entry is rejected, the
    /// ledger is left unchanged and a warning is raised that stays
    /// active for three seconds from `now`.
    pub fn add_water(&mut self, amount_ml: u32, goal_ml: u32, now: DateTime<Utc>) -> WaterAdd {
        debug_assert!(amount_ml > 0, "water amounts are guarded upstream");

        let projected = self.total_ml() + u64::from(amount_ml);
        if projected > u64::from(goal_ml) {
            tracing::warn!(
                "Rejected {} ml: projected {} ml exceeds goal {} ml",
                amount_ml,
                projected,
                goal_ml
            );
            self.warning_raised_at = Some(now);
            return WaterAdd::GoalExceeded;
        }

        self.entries.push(WaterEntry {
            amount_ml,
            logged_at: now,
        });
        tracing::debug!("Added {} ml (total {} ml)", amount_ml, projected);
        WaterAdd::Added
    }

    /// Remove the most recently appended entry; no-op if empty
    pub fn remove_last_entry(&mut self) {
        if self.entries.pop().is_none() {
            tracing::debug!("remove_last_entry: ledger empty");
        }
    }

    /// Sum of all entry amounts. Pure fold, recomputed on demand.
    pub fn total_ml(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.amount_ml)).sum()
    }

    /// Whether a goal-exceeded warning is currently visible.
    ///
    /// Expired warnings clear lazily on query.
    pub fn warning_active(&mut self, now: DateTime<Utc>) -> bool {
        match self.warning_raised_at {
            Some(raised_at) if now - raised_at < Duration::seconds(WARNING_LIFETIME_SECONDS) => {
                true
            }
            Some(_) => {
                self.warning_raised_at = None;
                false
            }
            None => false,
        }
    }

    /// Current entries in insertion order
    pub fn entries(&self) -> &[WaterEntry] {
        &self.entries
    }
}

/// Parse a user-supplied custom amount to a positive integer.
///
/// Non-numeric or non-positive input returns `None` and never reaches
/// [`WaterLedger::add_water`].
pub fn parse_custom_amount(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(amount) if amount > 0 => Some(amount),
        _ => None,
    }
}
