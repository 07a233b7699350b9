//! Core domain types for the Vitalog wellness tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Meals and their macro nutrients
//! - Water intake entries
//! - Nutrition goals and partial goal updates
//! - Meditation session definitions and timer status
//! - Users and their preferences

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// Meal Types
// ============================================================================

/// Opaque meal identifier, assigned by the ledger at creation time.
///
/// Monotonic and unique within a ledger; never reused after removal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealId(pub u64);

impl std::fmt::Display for MealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which meal of the day an entry belongs to
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Parse a meal type from user input, falling back to `Breakfast`
    pub fn parse_or_default(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::default(),
        }
    }
}

/// A logged meal. Immutable once created; deletable, never edited in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub eaten_at: DateTime<Utc>,
    pub meal_type: MealType,
}

/// User-submitted meal data before the ledger assigns identity.
///
/// Missing or malformed numeric fields coerce to 0, a missing type to
/// `Breakfast`. There is no rejection path.
#[derive(Clone, Debug, Default)]
pub struct MealDraft {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub meal_type: Option<MealType>,
}

/// Elementwise sum of macro nutrients over a set of meals
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

// ============================================================================
// Goal Types
// ============================================================================

/// Daily macro nutrient targets. All values are strictly positive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionGoal {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionGoal {
    /// Default set used by the dashboard view
    pub fn dashboard_default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 250.0,
            fat: 70.0,
        }
    }

    /// Default set used by the meal tracker view
    ///
    /// Kept separate from [`NutritionGoal::dashboard_default`] on purpose:
    /// the two call sites shipped with different defaults and were never
    /// reconciled.
    pub fn tracker_default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 200.0,
            fat: 65.0,
        }
    }
}

/// Partial update for a nutrition goal; only supplied fields change
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct NutritionGoalPatch {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

// ============================================================================
// Water Types
// ============================================================================

/// A single water intake entry (append-only)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaterEntry {
    pub amount_ml: u32,
    pub logged_at: DateTime<Utc>,
}

// ============================================================================
// Meditation Types
// ============================================================================

/// Category of guided meditation session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionCategory {
    Breathing,
    Mindfulness,
    Sleep,
    Stress,
}

/// An immutable catalog entry describing a guided meditation session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionDef {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_seconds: u32,
    pub category: SessionCategory,
}

/// Status of the single active-session timer
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

/// The catalog of available meditation sessions, loaded once at startup
#[derive(Clone, Debug)]
pub struct Catalog {
    pub sessions: BTreeMap<String, SessionDef>,
}

// ============================================================================
// User and Preferences Types
// ============================================================================

/// Per-user tracking preferences
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub water_goal_ml: u32,
    pub calorie_goal: f64,
    pub protein_goal: f64,
    pub carbs_goal: f64,
    pub fat_goal: f64,
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            water_goal_ml: 2000,
            calorie_goal: 2000.0,
            protein_goal: 150.0,
            carbs_goal: 250.0,
            fat_goal: 70.0,
            notifications_enabled: true,
        }
    }
}

/// Partial update for preferences; only supplied fields change
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PreferencesPatch {
    pub water_goal_ml: Option<u32>,
    pub calorie_goal: Option<f64>,
    pub protein_goal: Option<f64>,
    pub carbs_goal: Option<f64>,
    pub fat_goal: Option<f64>,
    pub notifications_enabled: Option<bool>,
}

impl Preferences {
    /// Merge a partial update field-by-field, leaving the rest untouched
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(v) = patch.water_goal_ml {
            self.water_goal_ml = v;
        }
        if let Some(v) = patch.calorie_goal {
            self.calorie_goal = v;
        }
        if let Some(v) = patch.protein_goal {
            self.protein_goal = v;
        }
        if let Some(v) = patch.carbs_goal {
            self.carbs_goal = v;
        }
        if let Some(v) = patch.fat_goal {
            self.fat_goal = v;
        }
        if let Some(v) = patch.notifications_enabled {
            self.notifications_enabled = v;
        }
    }
}

/// An authenticated user, as returned by the authentication collaborator
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub preferences: Preferences,
}
