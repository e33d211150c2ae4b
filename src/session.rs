use crate::models::user::UserProfile;
use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// A signed-in user and the bearer token issued at login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Where the session survives between page loads.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Browser `localStorage`, one JSON entry under `key`.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        gloo_utils::window().local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Option<Session> {
        let raw = self.storage()?.get_item(&self.key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!("[SESSION] Discarding unreadable stored session: {}", err);
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let Some(storage) = self.storage() else {
            warn!("[SESSION] Local storage unavailable, session will not persist");
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(&self.key, &raw).is_err() {
                    warn!("[SESSION] Failed to persist session");
                }
            }
            Err(err) => warn!("[SESSION] Failed to encode session: {}", err),
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Default)]
pub struct MemoryStore {
    session: RefCell<Option<Session>>,
}

impl MemoryStore {
    pub fn with_session(session: Session) -> Self {
        Self { session: RefCell::new(Some(session)) }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.session.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        self.session.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryStore::default();
        assert!(store.load().is_none());

        let session = Session {
            token: "t0k3n".into(),
            user: UserProfile { id: "u1".into(), name: "Asha".into(), ..Default::default() },
        };
        store.save(&session);
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert!(store.load().is_none());
    }
}
