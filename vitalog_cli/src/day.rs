//! The day's tracked state, round-tripped through the key-value store.
//!
//! Ledgers and goals live in memory while a command runs and are written
//! back under the `"day"` key afterwards, so consecutive invocations see
//! one continuous day.

use serde::{Deserialize, Serialize};
use vitalog_core::{Config, GoalStore, JsonStore, MealLedger, Result, WaterLedger};

/// Well-known store key for the day's ledgers and goals
const DAY_KEY: &str = "day";

/// Everything the tracker accumulates over a day
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DayState {
    pub meals: MealLedger,
    pub water: WaterLedger,
    pub goals: GoalStore,
    pub meditation_minutes: u32,
}

impl Default for DayState {
    fn default() -> Self {
        Self {
            meals: MealLedger::new(),
            water: WaterLedger::new(),
            goals: GoalStore::default(),
            meditation_minutes: 0,
        }
    }
}

impl DayState {
    /// Load the day from the store, seeding goals from config on first use
    pub fn load(store: &JsonStore, config: &Config) -> Result<Self> {
        match store.get::<DayState>(DAY_KEY)? {
            Some(day) => Ok(day),
            None => Ok(Self {
                goals: config.goal_store(),
                ..Self::default()
            }),
        }
    }

    /// Persist the day back to the store
    pub fn save(&self, store: &JsonStore) -> Result<()> {
        store.put(DAY_KEY, self)
    }
}
