//! Generic CRUD service over one REST resource.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use backoffice_core::Entity;

use crate::{ClientResult, Gateway};

/// REST routes of one entity. Prefixes are preserved exactly as the backend
/// exposes them, even where they are inconsistent across entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    /// `GET` the whole collection.
    pub list: &'static str,
    /// `GET {by_id}/{id}`.
    pub by_id: &'static str,
    /// `POST` create-or-update.
    pub save: &'static str,
    /// `DELETE {delete}/{id}`.
    pub delete: &'static str,
}

impl Routes {
    /// Plain REST collection: every operation on `base`.
    pub const fn rest(base: &'static str) -> Self {
        Self {
            list: base,
            by_id: base,
            save: base,
            delete: base,
        }
    }
}

/// An entity DTO bound to its routes.
pub trait Resource: Entity + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name used in logs.
    const NAME: &'static str;

    const ROUTES: Routes;
}

/// `getAll` / `getById` / `save` / `delete` for one resource.
///
/// Failures are logged and returned unchanged so callers can inspect the
/// server message.
#[derive(Debug, Clone)]
pub struct CrudService<R> {
    gateway: Gateway,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> CrudService<R> {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            _resource: PhantomData,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// The full collection; empty when the server sends nothing usable.
    pub async fn get_all(&self) -> ClientResult<Vec<R>> {
        self.list_at(R::ROUTES.list).await
    }

    pub async fn get_by_id(&self, id: R::Id) -> ClientResult<Option<R>> {
        let path = format!("{}/{}", R::ROUTES.by_id, id);
        let payload = self
            .gateway
            .get(&path)
            .await
            .inspect_err(|err| tracing::error!(resource = R::NAME, %id, error = %err, "failed to fetch"))?;
        Ok(payload.into_object())
    }

    /// Create or update; returns the stored entity when the server echoes it.
    pub async fn save(&self, item: &R) -> ClientResult<Option<R>> {
        let payload = self
            .gateway
            .post(R::ROUTES.save, item)
            .await
            .inspect_err(|err| tracing::error!(resource = R::NAME, error = %err, "failed to save"))?;
        tracing::info!(resource = R::NAME, new = item.is_new(), "saved");
        Ok(payload.into_object())
    }

    pub async fn delete(&self, id: R::Id) -> ClientResult<()> {
        let path = format!("{}/{}", R::ROUTES.delete, id);
        self.gateway
            .delete(&path)
            .await
            .inspect_err(|err| tracing::error!(resource = R::NAME, %id, error = %err, "failed to delete"))?;
        tracing::info!(resource = R::NAME, %id, "deleted");
        Ok(())
    }

    /// A list-returning `GET` on any path of this resource.
    pub(crate) async fn list_at(&self, path: &str) -> ClientResult<Vec<R>> {
        let payload = self
            .gateway
            .get(path)
            .await
            .inspect_err(|err| tracing::error!(resource = R::NAME, path, error = %err, "failed to list"))?;
        Ok(payload.into_list())
    }

    pub(crate) async fn list_with_query(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Vec<R>> {
        let payload = self
            .gateway
            .get_with_query(path, query)
            .await
            .inspect_err(|err| tracing::error!(resource = R::NAME, path, error = %err, "failed to list"))?;
        Ok(payload.into_list())
    }
}
