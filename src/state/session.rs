//! Session management
//!
//! This module keeps the logged-in identity in a [`SessionStorage`] and
//! sends the user back to the entry page through a [`Navigator`] when there
//! is no session.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::SessionConfig;
use crate::models::{ApiResult, Role, SessionUser};
use crate::services::AttendanceApi;
use crate::ui::Navigator;
use crate::utils::errors::Result;
use crate::utils::logging::log_session_event;
use super::storage::SessionStorage;

/// Session helpers bound to one storage and navigator
#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn SessionStorage>,
    navigator: Arc<dyn Navigator>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(
        storage: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
        config: SessionConfig,
    ) -> Self {
        Self {
            storage,
            navigator,
            config,
        }
    }

    /// Return the stored user, or redirect to the entry page and return `None`
    pub fn check_auth(&self) -> Option<SessionUser> {
        match self.current_user() {
            Some(user) => Some(user),
            None => {
                log_session_event("missing_session", None, Some(&self.config.entry_page));
                self.navigator.redirect(&self.config.entry_page);
                None
            }
        }
    }

    /// Read the stored user without redirecting
    ///
    /// A record that cannot be read or parsed counts as no session and is
    /// removed.
    pub fn current_user(&self) -> Option<SessionUser> {
        let raw = match self.storage.get_item(&self.config.storage_key) {
            Ok(raw) => raw?,
            Err(e) => {
                error!(error = %e, "Failed to read session storage");
                return None;
            }
        };

        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session record");
                if let Err(e) = self.storage.remove_item(&self.config.storage_key) {
                    error!(error = %e, "Failed to clear session record");
                }
                None
            }
        }
    }

    pub fn store_user(&self, user: &SessionUser) -> Result<()> {
        let serialized = serde_json::to_string(user)?;
        self.storage.set_item(&self.config.storage_key, &serialized)?;
        debug!(key = %self.config.storage_key, "Session user stored");
        Ok(())
    }

    /// Log in and, on success, keep the returned identity as the session user
    ///
    /// The login result is returned unchanged unless the identity cannot be
    /// stored, in which case the storage error is reported as a failure.
    pub async fn sign_in(
        &self,
        api: &AttendanceApi,
        role: Role,
        identifier: &str,
        password: &str,
    ) -> ApiResult {
        let result = api.login(role, identifier, password).await;

        if let ApiResult::Success { data: Some(data) } = &result {
            let user = SessionUser::new(data.clone());
            if let Err(e) = self.store_user(&user) {
                error!(error = %e, "Failed to persist session user");
                return ApiResult::failure(e.to_string());
            }
            log_session_event("sign_in", Some(role.as_str()), user.name());
        }

        result
    }

    /// Clear the session user and redirect to the entry page
    ///
    /// The redirect happens even when the record cannot be cleared; the
    /// storage error is returned so the caller can report it.
    pub fn logout(&self) -> Result<()> {
        let role = self.current_user().and_then(|user| user.role());
        let cleared = self.storage.remove_item(&self.config.storage_key);
        match &cleared {
            Ok(()) => log_session_event("logout", role.map(Role::as_str), None),
            Err(e) => error!(error = %e, "Failed to clear session record"),
        }
        self.navigator.redirect(&self.config.entry_page);
        cleared
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::state::MemorySessionStorage;
    use crate::utils::errors::AttendanceError;
    use crate::ui::RecordingNavigator;

    fn manager() -> (SessionManager, Arc<MemorySessionStorage>, Arc<RecordingNavigator>) {
        let storage = Arc::new(MemorySessionStorage::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let manager = SessionManager::new(
            storage.clone(),
            navigator.clone(),
            SessionConfig::default(),
        );
        (manager, storage, navigator)
    }

    #[test]
    fn test_check_auth_without_session_redirects() {
        let (manager, _, navigator) = manager();
        assert_eq!(manager.check_auth(), None);
        assert_eq!(navigator.history(), vec!["index.html".to_string()]);
    }

    #[test]
    fn test_check_auth_returns_stored_record() {
        let (manager, storage, navigator) = manager();
        storage
            .set_item("user", r#"{"role":"admin","email":"admin@school.test"}"#)
            .unwrap();

        let user = manager.check_auth().unwrap();
        assert_eq!(user.role(), Some(Role::Admin));
        assert_eq!(user.as_value(), &json!({"role": "admin", "email": "admin@school.test"}));
        assert!(navigator.history().is_empty());
    }

    #[test]
    fn test_unreadable_record_is_discarded() {
        let (manager, storage, navigator) = manager();
        storage.set_item("user", "{truncated").unwrap();

        assert_eq!(manager.check_auth(), None);
        assert_eq!(storage.get_item("user").unwrap(), None);
        assert_eq!(navigator.last().as_deref(), Some("index.html"));
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let (manager, storage, navigator) = manager();
        manager
            .store_user(&SessionUser::new(json!({"role": "student", "studentId": 4})))
            .unwrap();

        manager.logout().unwrap();
        assert_eq!(storage.get_item("user").unwrap(), None);
        assert_eq!(navigator.last().as_deref(), Some("index.html"));
    }

    #[test]
    fn test_custom_key_and_entry_page() {
        let storage = Arc::new(MemorySessionStorage::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let config = SessionConfig {
            storage_key: "attendance_user".to_string(),
            entry_page: "login.html".to_string(),
            ..SessionConfig::default()
        };
        let manager = SessionManager::new(storage.clone(), navigator.clone(), config);

        manager.store_user(&SessionUser::new(json!({"role": "admin"}))).unwrap();
        assert!(storage.get_item("attendance_user").unwrap().is_some());

        manager.logout().unwrap();
        assert_eq!(navigator.last().as_deref(), Some("login.html"));
    }

    /// Storage that can be read but never written
    struct ReadOnlyStorage;

    impl SessionStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AttendanceError::Storage("read-only".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(AttendanceError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_logout_reports_storage_failure_and_still_redirects() {
        let navigator = Arc::new(RecordingNavigator::new());
        let manager = SessionManager::new(
            Arc::new(ReadOnlyStorage),
            navigator.clone(),
            SessionConfig::default(),
        );

        assert!(matches!(manager.logout(), Err(AttendanceError::Storage(_))));
        assert_eq!(navigator.last().as_deref(), Some("index.html"));
    }
}
