use super::{ConfigStore, FieldId, FieldWrite, StoreError};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Lock-protected store handle.
///
/// Other subsystems (control loop, RC input) hold clones and may read or write
/// fields at any time. A menu commit takes the write lock once, so readers
/// never observe a half-applied commit.
#[derive(Debug, Default)]
pub struct SharedStore<S> {
    inner: Arc<RwLock<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ConfigStore> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn lock(&self) -> RwLockReadGuard<'_, S> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lock_mut(&self) -> RwLockWriteGuard<'_, S> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: ConfigStore> ConfigStore for SharedStore<S> {
    fn read(&self, field: FieldId) -> Option<i32> {
        self.lock().read(field)
    }

    fn write(&mut self, field: FieldId, value: i32) -> Result<(), StoreError> {
        self.lock_mut().write(field, value)
    }

    fn commit(&mut self, writes: &[FieldWrite]) -> Result<(), StoreError> {
        self.lock_mut().commit(writes)
    }
}
