//! Persisted session: bearer token + cached user profile.
//!
//! The login flow (external) writes both; the console reads them at mount and
//! the gateway clears the token on 401.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use backoffice_auth::AuthContext;

/// Storage backing the session.
pub trait SessionStore: Send + Sync + core::fmt::Debug {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str) -> io::Result<()>;

    /// Drop the token, keeping the cached profile.
    fn clear_token(&self) -> io::Result<()>;

    /// Raw JSON of the cached user profile.
    fn user_json(&self) -> Option<String>;

    fn set_user_json(&self, user: &str) -> io::Result<()>;

    /// Logout: drop everything.
    fn clear(&self) -> io::Result<()>;

    /// Authorization facts for the cached profile. Never fails.
    fn auth_context(&self) -> AuthContext {
        AuthContext::from_session_json(self.user_json().as_deref())
    }
}

/// On-disk / in-memory layout of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<serde_json::Value>,
    /// Profile text that was not JSON, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_raw: Option<String>,
}

impl SessionData {
    fn user_json(&self) -> Option<String> {
        match (&self.user, &self.user_raw) {
            (Some(user), _) => Some(user.to_string()),
            (None, raw) => raw.clone(),
        }
    }

    fn set_user_json(&mut self, raw: &str) {
        match serde_json::from_str(raw) {
            Ok(user) => {
                self.user = Some(user);
                self.user_raw = None;
            }
            Err(_) => {
                self.user = None;
                self.user_raw = Some(raw.to_string());
            }
        }
    }
}

/// Process-local session (tests, embedded shells).
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    data: RwLock<SessionData>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            data: RwLock::new(SessionData {
                token: Some(token.into()),
                ..SessionData::default()
            }),
        }
    }

    fn write(&self, f: impl FnOnce(&mut SessionData)) -> io::Result<()> {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&SessionData) -> T) -> T {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.read(|d| d.token.clone())
    }

    fn set_token(&self, token: &str) -> io::Result<()> {
        self.write(|d| d.token = Some(token.to_string()))
    }

    fn clear_token(&self) -> io::Result<()> {
        self.write(|d| d.token = None)
    }

    fn user_json(&self) -> Option<String> {
        self.read(SessionData::user_json)
    }

    fn set_user_json(&self, user: &str) -> io::Result<()> {
        self.write(|d| d.set_user_json(user))
    }

    fn clear(&self) -> io::Result<()> {
        self.write(|d| *d = SessionData::default())
    }
}

/// JSON-file session, re-read on every access.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files read as an empty session.
    fn load(&self) -> SessionData {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return SessionData::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable session file");
            SessionData::default()
        })
    }

    fn save(&self, data: &SessionData) -> io::Result<()> {
        if *data == SessionData::default() {
            return match fs::remove_file(&self.path) {
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                other => other,
            };
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)
    }

    fn update(&self, f: impl FnOnce(&mut SessionData)) -> io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut data = self.load();
        f(&mut data);
        self.save(&data)
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.load().token
    }

    fn set_token(&self, token: &str) -> io::Result<()> {
        self.update(|d| d.token = Some(token.to_string()))
    }

    fn clear_token(&self) -> io::Result<()> {
        self.update(|d| d.token = None)
    }

    fn user_json(&self) -> Option<String> {
        self.load().user_json()
    }

    fn set_user_json(&self, user: &str) -> io::Result<()> {
        self.update(|d| d.set_user_json(user))
    }

    fn clear(&self) -> io::Result<()> {
        self.update(|d| *d = SessionData::default())
    }
}
