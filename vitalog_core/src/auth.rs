//! Authentication session management.
//!
//! The network-backed authenticator is an external collaborator behind
//! the [`AuthBackend`] trait; this module owns the session around it:
//! restore-on-startup from the durable store, a single in-flight guard
//! per operation, and persistence of the authenticated user under the
//! well-known `"user"` key. Errors propagate to the caller for display
//! and are never retried internally.

use crate::{AuthError, Error, JsonStore, Preferences, PreferencesPatch, Result, User};
use uuid::Uuid;

/// Well-known store key the authenticated user is serialized under
const USER_KEY: &str = "user";

/// External authentication collaborator
pub trait AuthBackend {
    fn login(&self, email: &str, password: &str) -> std::result::Result<User, AuthError>;

    fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> std::result::Result<User, AuthError>;

    fn update_preferences(
        &self,
        user_id: Uuid,
        patch: &PreferencesPatch,
    ) -> std::result::Result<Preferences, AuthError>;
}

/// Session state around an [`AuthBackend`].
///
/// The `loading` flag is the single in-flight guard: an operation
/// submitted while another is in flight is skipped, and the flag is
/// always cleared regardless of outcome.
pub struct AuthSession<B: AuthBackend> {
    backend: B,
    store: JsonStore,
    user: Option<User>,
    loading: bool,
    last_error: Option<AuthError>,
}

impl<B: AuthBackend> AuthSession<B> {
    /// Create a session, restoring a persisted user synchronously.
    ///
    /// Presence of the `"user"` key restores the session before first
    /// render; a corrupted value reads as absent.
    pub fn restore(backend: B, store: JsonStore) -> Result<Self> {
        let user = store.get::<User>(USER_KEY)?;
        if let Some(u) = &user {
            tracing::info!("Restored session for {}", u.email);
        }
        Ok(Self {
            backend,
            store,
            user,
            loading: false,
            last_error: None,
        })
    }

    /// Authenticate and persist the returned user.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        if self.loading {
            tracing::debug!("login skipped: another request is in flight");
            return Ok(());
        }
        self.loading = true;
        self.last_error = None;

        let outcome = self.backend.login(email, password);
        self.loading = false;

        match outcome {
            Ok(user) => {
                self.store.put(USER_KEY, &user)?;
                tracing::info!("Logged in as {}", user.email);
                self.user = Some(user);
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                Err(Error::Auth(e))
            }
        }
    }

    /// Register a new account and persist the returned user.
    pub fn register(&mut self, email: &str, password: &str, name: &str) -> Result<()> {
        if self.loading {
            tracing::debug!("register skipped: another request is in flight");
            return Ok(());
        }
        self.loading = true;
        self.last_error = None;

        let outcome = self.backend.register(email, password, name);
        self.loading = false;

        match outcome {
            Ok(user) => {
                self.store.put(USER_KEY, &user)?;
                tracing::info!("Registered {}", user.email);
                self.user = Some(user);
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                Err(Error::Auth(e))
            }
        }
    }

    /// Merge a partial preference update through the backend and persist
    /// the updated user.
    pub fn update_preferences(&mut self, patch: &PreferencesPatch) -> Result<()> {
        if self.loading {
            tracing::debug!("update_preferences skipped: another request is in flight");
            return Ok(());
        }
        let Some(user) = self.user.as_mut() else {
            return Err(Error::Auth(AuthError::PreferencesUpdateFailed));
        };
        self.loading = true;
        self.last_error = None;

        let outcome = self.backend.update_preferences(user.id, patch);
        self.loading = false;

        match outcome {
            Ok(preferences) => {
                user.preferences = preferences;
                self.store.put(USER_KEY, &*user)?;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                Err(Error::Auth(e))
            }
        }
    }

    /// Clear the session and the persisted user
    pub fn logout(&mut self) -> Result<()> {
        self.user = None;
        self.last_error = None;
        self.store.remove(USER_KEY)?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last error surfaced for display, if any
    pub fn last_error(&self) -> Option<&AuthError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory backend accepting a single known credential pair
    struct FixedBackend {
        email: String,
        password: String,
        fail_preferences: bool,
    }

    impl FixedBackend {
        fn new(email: &str, password: &str) -> Self {
            Self {
                email: email.into(),
                password: password.into(),
                fail_preferences: false,
            }
        }

        fn user(&self) -> User {
            User {
                id: Uuid::new_v4(),
                email: self.email.clone(),
                name: "Test User".into(),
                preferences: Preferences::default(),
            }
        }
    }

    impl AuthBackend for FixedBackend {
        fn login(&self, email: &str, password: &str) -> std::result::Result<User, AuthError> {
            if email == self.email && password == self.password {
                Ok(self.user())
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }

        fn register(
            &self,
            email: &str,
            _password: &str,
            name: &str,
        ) -> std::result::Result<User, AuthError> {
            if email.contains('@') {
                Ok(User {
                    name: name.into(),
                    email: email.into(),
                    ..self.user()
                })
            } else {
                Err(AuthError::RegistrationFailed)
            }
        }

        fn update_preferences(
            &self,
            _user_id: Uuid,
            patch: &PreferencesPatch,
        ) -> std::result::Result<Preferences, AuthError> {
            if self.fail_preferences {
                return Err(AuthError::PreferencesUpdateFailed);
            }
            let mut preferences = Preferences::default();
            preferences.apply(patch);
            Ok(preferences)
        }
    }

    fn session_in(dir: &std::path::Path) -> AuthSession<FixedBackend> {
        AuthSession::restore(
            FixedBackend::new("a@example.com", "hunter2"),
            JsonStore::open(dir),
        )
        .unwrap()
    }

    #[test]
    fn test_login_persists_and_restores() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut session = session_in(temp_dir.path());
        assert!(session.user().is_none());

        session.login("a@example.com", "hunter2").unwrap();
        assert_eq!(session.user().unwrap().email, "a@example.com");

        // A fresh session restores from the store before first render
        let restored = session_in(temp_dir.path());
        assert_eq!(restored.user().unwrap().email, "a@example.com");
    }

    #[test]
    fn test_invalid_credentials_surface_and_clear_loading() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = session_in(temp_dir.path());

        let err = session.login("a@example.com", "wrong").unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::InvalidCredentials)));
        assert_eq!(session.last_error(), Some(&AuthError::InvalidCredentials));
        assert!(!session.is_loading());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_logout_clears_persisted_user() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = session_in(temp_dir.path());

        session.login("a@example.com", "hunter2").unwrap();
        session.logout().unwrap();
        assert!(session.user().is_none());

        let restored = session_in(temp_dir.path());
        assert!(restored.user().is_none());
    }

    #[test]
    fn test_update_preferences_merges_partial_patch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = session_in(temp_dir.path());
        session.login("a@example.com", "hunter2").unwrap();

        session
            .update_preferences(&PreferencesPatch {
                water_goal_ml: Some(2500),
                ..Default::default()
            })
            .unwrap();

        let prefs = &session.user().unwrap().preferences;
        assert_eq!(prefs.water_goal_ml, 2500);
        assert_eq!(prefs.calorie_goal, 2000.0);
    }

    #[test]
    fn test_preferences_failure_keeps_user_intact() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut backend = FixedBackend::new("a@example.com", "hunter2");
        backend.fail_preferences = true;
        let mut session =
            AuthSession::restore(backend, JsonStore::open(temp_dir.path())).unwrap();

        session.login("a@example.com", "hunter2").unwrap();
        let before = session.user().unwrap().preferences.clone();

        let err = session
            .update_preferences(&PreferencesPatch {
                water_goal_ml: Some(9999),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Auth(AuthError::PreferencesUpdateFailed)
        ));
        assert_eq!(session.user().unwrap().preferences, before);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut session = session_in(temp_dir.path());

        let err = session.register("not-an-email", "pw", "Someone").unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::RegistrationFailed)));
        assert!(session.user().is_none());
    }
}
