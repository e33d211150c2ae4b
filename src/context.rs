//! The application context handed to every page.
//!
//! It owns the API client and the reactive session. Login and logout go through
//! here explicitly; nothing else writes the session.

use crate::api::{ApiClient, HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::user::{Credentials, Registration, Role, UserProfile};
use crate::session::{LocalStorageStore, Session, SessionStore};
use leptos::logging::log;
use leptos::*;
use std::rc::Rc;

pub struct AppContext<T: Transport = HttpTransport> {
    pub api: ApiClient<T>,
    store: Rc<dyn SessionStore>,
    session: RwSignal<Option<Session>>,
}

impl<T: Transport> Clone for AppContext<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: Rc::clone(&self.store),
            session: self.session,
        }
    }
}

impl AppContext<HttpTransport> {
    /// Browser context: `fetch` transport, session kept in local storage.
    pub fn browser(config: ClientConfig) -> Self {
        let store: Rc<dyn SessionStore> =
            Rc::new(LocalStorageStore::new(config.session_key.clone()));
        Self::new(config, HttpTransport, store)
    }
}

impl<T: Transport> AppContext<T> {
    /// Restores whatever session `store` already holds.
    pub fn new(config: ClientConfig, transport: T, store: Rc<dyn SessionStore>) -> Self {
        let restored = store.load();
        if let Some(session) = &restored {
            log!("[SESSION] Restored session for {}", session.user.name);
        }
        Self {
            api: ApiClient::new(config, transport, Rc::clone(&store)),
            store,
            session: create_rw_signal(restored),
        }
    }

    pub fn session(&self) -> RwSignal<Option<Session>> {
        self.session
    }

    /// Whether a session exists, as a memo: it only notifies when that flips,
    /// not when the signed-in user's profile is refreshed.
    pub fn signed_in(&self) -> Memo<bool> {
        let session = self.session;
        create_memo(move |_| session.with(Option::is_some))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn current_user_id(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.user.id.clone()))
    }

    pub fn current_role(&self) -> Role {
        self.session
            .with(|s| s.as_ref().map(|s| s.user.role))
            .unwrap_or_default()
    }

    /// Starts a session: persisted first, then published to the UI.
    pub fn establish(&self, session: Session) {
        log!("[SESSION] Signed in as {}", session.user.name);
        self.store.save(&session);
        self.session.set(Some(session));
    }

    /// Ends the session and forgets the stored token.
    pub fn logout(&self) {
        log!("[SESSION] Signed out");
        self.store.clear();
        self.session.set(None);
    }

    /// Replaces the signed-in user's profile, keeping the token.
    pub fn refresh_user(&self, user: UserProfile) {
        let Some(mut session) = self.session.get_untracked() else {
            return;
        };
        session.user = user;
        self.establish(session);
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ApiError> {
        let auth = self.api.login(credentials).await?;
        let user = auth.user.clone();
        self.establish(Session { token: auth.token, user: auth.user });
        Ok(user)
    }

    pub async fn register(&self, registration: &Registration) -> Result<UserProfile, ApiError> {
        let auth = self.api.register(registration).await?;
        let user = auth.user.clone();
        self.establish(Session { token: auth.token, user: auth.user });
        Ok(user)
    }
}
