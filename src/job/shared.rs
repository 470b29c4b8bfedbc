use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// A component handle paired with its instance-scoped serialization gate.
///
/// Cloning shares both the component and the gate, so every job holding a
/// clone serializes its calls into that one instance while jobs over other
/// instances proceed in parallel. The gate is created once per instance: the
/// processor wraps its source and transform, the builder wraps each sink it
/// was constructed with.
pub(crate) struct Shared<C: ?Sized> {
    component: Arc<C>,
    gate: Arc<Mutex<()>>,
}

impl<C: ?Sized> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Shared {
            component: Arc::clone(&self.component),
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<C: ?Sized> Shared<C> {
    pub(crate) fn new(component: Arc<C>) -> Self {
        Shared {
            component,
            gate: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) fn get(&self) -> &C {
        &self.component
    }

    /// Acquires the instance gate. The capability call is made while the
    /// returned guard is alive.
    pub(crate) async fn serialized(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}
