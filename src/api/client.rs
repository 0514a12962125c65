//! Purpose: In-process handle over a shared `DirectoryStore`.
//! Exports: `LocalDirectory`.
//! Role: The local counterpart of `RemoteClient`; the HTTP server holds one
//! as its state.
//! Invariants: Method surface mirrors the remote client's resource calls.
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::core::directory::DirectoryStore;
use crate::core::error::Error;

pub type ApiResult<T> = Result<T, Error>;

#[derive(Clone)]
pub struct LocalDirectory {
    store: Arc<Mutex<DirectoryStore>>,
}

impl LocalDirectory {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(DirectoryStore::new())),
        }
    }

    pub fn seeded() -> ApiResult<Self> {
        Ok(Self {
            store: Arc::new(Mutex::new(DirectoryStore::seeded()?)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, DirectoryStore> {
        self.store.lock().unwrap_or_else(|poison| poison.into_inner())
    }

    pub fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        self.lock().login(email, password)
    }

    pub fn is_session(&self, token: &str) -> bool {
        self.lock().is_session(token)
    }

    pub fn categories(&self) -> Vec<Value> {
        self.lock().categories()
    }

    pub fn category(&self, id: &str) -> Option<Value> {
        self.lock().category(id)
    }

    pub fn create_category(&self, payload: &Value) -> ApiResult<Value> {
        self.lock().create_category(payload)
    }

    pub fn update_category(&self, id: &str, payload: &Value) -> ApiResult<Value> {
        self.lock().update_category(id, payload)
    }

    pub fn delete_category(&self, id: &str) -> ApiResult<Value> {
        self.lock().delete_category(id)
    }

    pub fn recipes(&self) -> Vec<Value> {
        self.lock().recipes()
    }

    pub fn recipe(&self, id: &str) -> Option<Value> {
        self.lock().recipe(id)
    }

    pub fn create_recipe(&self, payload: &Value) -> ApiResult<Value> {
        self.lock().create_recipe(payload)
    }

    pub fn update_recipe(&self, id: &str, payload: &Value) -> ApiResult<Value> {
        self.lock().update_recipe(id, payload)
    }

    pub fn delete_recipe(&self, id: &str) -> ApiResult<Value> {
        self.lock().delete_recipe(id)
    }

    pub fn destinations(&self) -> Vec<Value> {
        self.lock().destinations()
    }

    pub fn destination(&self, id: &str) -> Option<Value> {
        self.lock().destination(id)
    }

    pub fn create_destination(&self, payload: &Value) -> ApiResult<Value> {
        self.lock().create_destination(payload)
    }

    pub fn update_destination(&self, id: &str, payload: &Value) -> ApiResult<Value> {
        self.lock().update_destination(id, payload)
    }

    pub fn delete_destination(&self, id: &str) -> ApiResult<Value> {
        self.lock().delete_destination(id)
    }
}

impl Default for LocalDirectory {
    fn default() -> Self {
        Self::new()
    }
}
