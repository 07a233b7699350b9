//! Read-only metric projection plus bounded quick-add mutations.
//!
//! The aggregator combines the ledgers, the meditation engine and the
//! goal store into a uniform `{label, current, goal, unit}` view for
//! display. It owns no state of its own: every value is recomputed from
//! the source of truth on each call.
//!
//! Quick-add is the one mutation surface here. Unlike the full ledger
//! paths it is goal-capped: the resulting current value never exceeds
//! the goal.

use crate::config::QuickAddConfig;
use crate::{GoalStore, MealDraft, MealLedger, MealType, MeditationEngine, WaterLedger};
use chrono::{DateTime, Utc};

/// One row of the display projection
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    pub label: String,
    pub current: f64,
    pub goal: f64,
    pub unit: &'static str,
}

impl Metric {
    /// Progress toward the goal, in percent. Deliberately not clamped;
    /// the display layer may clamp, the aggregator does not.
    pub fn percentage(&self) -> f64 {
        self.current / self.goal * 100.0
    }
}

/// Categories exposed to the summary view's quick-add buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAddCategory {
    Water,
    Calories,
    Meditation,
}

/// Compute the display projection over the current domain state
pub fn snapshot(
    meals: &MealLedger,
    water: &WaterLedger,
    engine: &MeditationEngine,
    goals: &GoalStore,
) -> Vec<Metric> {
    vec![
        Metric {
            label: "Water Intake".into(),
            current: water.total_ml() as f64,
            goal: f64::from(goals.water_ml),
            unit: "ml",
        },
        Metric {
            label: "Calories".into(),
            current: meals.totals().calories,
            goal: goals.nutrition.calories,
            unit: "kcal",
        },
        Metric {
            label: "Meditation".into(),
            current: f64::from(engine.minutes_logged()),
            goal: f64::from(goals.meditation_minutes),
            unit: "min",
        },
    ]
}

/// Apply a goal-capped quick increment to the relevant ledger.
///
/// The increment is clamped so the resulting current value never exceeds
/// the goal: `min(current + increment, goal)`. At or above goal this is a
/// no-op. Returns the amount actually applied.
pub fn quick_add(
    category: QuickAddCategory,
    meals: &mut MealLedger,
    water: &mut WaterLedger,
    engine: &mut MeditationEngine,
    goals: &GoalStore,
    increments: &QuickAddConfig,
    now: DateTime<Utc>,
) -> f64 {
    match category {
        QuickAddCategory::Water => {
            let current = water.total_ml();
            let goal = u64::from(goals.water_ml);
            let delta = u64::from(increments.water_ml).min(goal.saturating_sub(current));
            if delta > 0 {
                water.add_water(delta as u32, goals.water_ml, now);
            }
            delta as f64
        }
        QuickAddCategory::Calories => {
            let current = meals.totals().calories;
            let delta = f64::from(increments.calories).min(goals.nutrition.calories - current);
            if delta > 0.0 {
                meals.add_meal(MealDraft {
                    name: Some("Quick add".into()),
                    calories: Some(delta),
                    meal_type: Some(MealType::Snack),
                    ..Default::default()
                });
                delta
            } else {
                0.0
            }
        }
        QuickAddCategory::Meditation => {
            let current = engine.minutes_logged();
            let delta = increments
                .meditation_minutes
                .min(goals.meditation_minutes.saturating_sub(current));
            if delta > 0 {
                engine.log_minutes(delta);
            }
            f64::from(delta)
        }
    }
}
