//! Daily goal storage and partial goal updates.
//!
//! The goal store holds the mutable daily targets that ledger aggregates
//! are measured against. Goals are never derived from ledger contents.

use crate::{NutritionGoal, NutritionGoalPatch};
use serde::{Deserialize, Serialize};

/// Mutable daily targets: macros, water volume, and meditation minutes.
///
/// One instance per user session. Goal values are strictly positive;
/// non-positive values in a partial update are ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoalStore {
    pub nutrition: NutritionGoal,
    pub water_ml: u32,
    pub meditation_minutes: u32,
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::with_dashboard_defaults()
    }
}

impl GoalStore {
    /// Goal store seeded with the dashboard default nutrition set
    pub fn with_dashboard_defaults() -> Self {
        Self {
            nutrition: NutritionGoal::dashboard_default(),
            water_ml: 2000,
            meditation_minutes: 30,
        }
    }

    /// Goal store seeded with the meal tracker default nutrition set
    pub fn with_tracker_defaults() -> Self {
        Self {
            nutrition: NutritionGoal::tracker_default(),
            water_ml: 2000,
            meditation_minutes: 30,
        }
    }

    /// Merge a partial nutrition goal update, leaving unspecified fields
    /// untouched.
    ///
    /// Non-positive values violate the goal invariant and are ignored
    /// with a warning.
    pub fn update_nutrition(&mut self, patch: &NutritionGoalPatch) {
        merge_field(&mut self.nutrition.calories, patch.calories, "calories");
        merge_field(&mut self.nutrition.protein, patch.protein, "protein");
        merge_field(&mut self.nutrition.carbs, patch.carbs, "carbs");
        merge_field(&mut self.nutrition.fat, patch.fat, "fat");
    }

    /// Set the daily water goal; non-positive values are ignored
    pub fn set_water_goal(&mut self, ml: u32) {
        if ml == 0 {
            tracing::warn!("Ignoring non-positive water goal");
            return;
        }
        self.water_ml = ml;
    }

    /// Set the daily meditation goal; non-positive values are ignored
    pub fn set_meditation_goal(&mut self, minutes: u32) {
        if minutes == 0 {
            tracing::warn!("Ignoring non-positive meditation goal");
            return;
        }
        self.meditation_minutes = minutes;
    }
}

fn merge_field(target: &mut f64, value: Option<f64>, field: &str) {
    if let Some(v) = value {
        if v.is_finite() && v > 0.0 {
            *target = v;
        } else {
            tracing::warn!("Ignoring non-positive {} goal: {}", field, v);
        }
    }
}
