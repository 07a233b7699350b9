//! The meal ledger: an append-only ordered collection of meals.
//!
//! The ledger owns meal identity (ids are assigned at creation time) and
//! derives macro totals as a pure fold over current entries. Totals are
//! recomputed on demand and never cached, so stored totals can never
//! drift from ledger contents.

use crate::{MacroTotals, Meal, MealDraft, MealId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Ordered collection of meals with derived aggregate queries.
///
/// Entries are kept in insertion order; removal preserves the relative
/// order of survivors.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MealLedger {
    meals: Vec<Meal>,
    next_id: u64,
}

impl MealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a meal constructed from a draft.
    ///
    /// Always succeeds: malformed or missing numeric fields coerce to 0,
    /// a missing meal type to breakfast. Id and timestamp are assigned
    /// here, never by the caller.
    pub fn add_meal(&mut self, draft: MealDraft) -> MealId {
        let id = MealId(self.next_id);
        self.next_id += 1;

        let meal = Meal {
            id,
            name: draft.name.unwrap_or_default(),
            calories: sanitize(draft.calories),
            protein: sanitize(draft.protein),
            carbs: sanitize(draft.carbs),
            fat: sanitize(draft.fat),
            eaten_at: Utc::now(),
            meal_type: draft.meal_type.unwrap_or_default(),
        };

        tracing::debug!("Added meal {} ({} kcal)", meal.id, meal.calories);
        self.meals.push(meal);
        id
    }

    /// Remove the meal with the given id.
    ///
    /// Removing an absent id is a no-op, so repeated deletes are
    /// idempotent.
    pub fn remove_meal(&mut self, id: MealId) {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != id);
        if self.meals.len() == before {
            tracing::debug!("remove_meal: id {} not present", id);
        }
    }

    /// Elementwise macro sum over all current entries. O(n), on demand.
    pub fn totals(&self) -> MacroTotals {
        self.meals.iter().fold(MacroTotals::default(), |acc, m| MacroTotals {
            calories: acc.calories + m.calories,
            protein: acc.protein + m.protein,
            carbs: acc.carbs + m.carbs,
            fat: acc.fat + m.fat,
        })
    }

    /// Current entries in insertion order
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }
}

/// Coerce a user-supplied numeric field to a safe non-negative value
fn sanitize(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            tracing::warn!("Coercing invalid meal value {} to 0", v);
            0.0
        }
        None => 0.0,
    }
}
