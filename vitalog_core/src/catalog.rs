//! Default catalog of guided meditation sessions.
//!
//! The catalog is static configuration data: loaded once, immutable
//! thereafter. Swapping the source does not affect engine behavior.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of guided sessions
///
/// **Note**: For production use, prefer `get_default_catalog()` which
/// returns a cached reference. This function is retained for testing and
/// custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn build_default_catalog_internal() -> Catalog {
    let mut sessions = BTreeMap::new();

    sessions.insert(
        "deep_breathing".into(),
        SessionDef {
            id: "deep_breathing".into(),
            title: "Deep Breathing".into(),
            description: "A calming session focusing on deep breathing techniques.".into(),
            duration_seconds: 300,
            category: SessionCategory::Breathing,
        },
    );

    sessions.insert(
        "body_scan".into(),
        SessionDef {
            id: "body_scan".into(),
            title: "Body Scan".into(),
            description: "Progressive relaxation through body awareness.".into(),
            duration_seconds: 600,
            category: SessionCategory::Mindfulness,
        },
    );

    sessions.insert(
        "sleep_meditation".into(),
        SessionDef {
            id: "sleep_meditation".into(),
            title: "Sleep Meditation".into(),
            description: "Gentle guidance to help you fall asleep.".into(),
            duration_seconds: 900,
            category: SessionCategory::Sleep,
        },
    );

    sessions.insert(
        "stress_relief".into(),
        SessionDef {
            id: "stress_relief".into(),
            title: "Stress Relief".into(),
            description: "Quick stress reduction techniques.".into(),
            duration_seconds: 300,
            category: SessionCategory::Stress,
        },
    );

    Catalog { sessions }
}

impl Catalog {
    /// Look up a session definition by id
    pub fn session(&self, id: &str) -> Option<&SessionDef> {
        self.sessions.get(id)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.sessions.is_empty() {
            errors.push("Catalog has no sessions".to_string());
        }

        for (id, def) in &self.sessions {
            if id.is_empty() || def.id.is_empty() {
                errors.push("Session definition has empty ID".to_string());
            }
            if id != &def.id {
                errors.push(format!(
                    "Session key '{}' doesn't match definition.id '{}'",
                    id, def.id
                ));
            }
            if def.title.is_empty() {
                errors.push(format!("Session '{}' has empty title", id));
            }
            if def.duration_seconds == 0 {
                errors.push(format!("Session '{}' has zero duration", id));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.sessions.len(), 4);
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_expected_sessions_present() {
        let catalog = build_default_catalog();

        let breathing = catalog.session("deep_breathing").unwrap();
        assert_eq!(breathing.duration_seconds, 300);
        assert_eq!(breathing.category, SessionCategory::Breathing);

        let scan = catalog.session("body_scan").unwrap();
        assert_eq!(scan.duration_seconds, 600);
        assert_eq!(scan.category, SessionCategory::Mindfulness);

        let sleep = catalog.session("sleep_meditation").unwrap();
        assert_eq!(sleep.duration_seconds, 900);
        assert_eq!(sleep.category, SessionCategory::Sleep);

        let stress = catalog.session("stress_relief").unwrap();
        assert_eq!(stress.duration_seconds, 300);
        assert_eq!(stress.category, SessionCategory::Stress);
    }

    #[test]
    fn test_zero_duration_fails_validation() {
        let mut catalog = build_default_catalog();
        catalog
            .sessions
            .get_mut("deep_breathing")
            .unwrap()
            .duration_seconds = 0;

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("zero duration")));
    }
}
