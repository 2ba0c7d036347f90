//! Liveness tracking for view-owned background tasks.
//!
//! DESIGN
//! ======
//! Every view that fetches on mount installs a [`ViewScope`]. Tasks are
//! wrapped in `futures::future::Abortable` and registered with the scope;
//! closing the scope on view cleanup aborts them, so a response arriving after
//! unmount never touches discarded state. A task deregisters itself when it
//! finishes or is dropped, so long-lived views hold only in-flight handles.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};

/// Abort handles of in-flight tasks, keyed by registration order.
#[derive(Debug, Default)]
struct TaskTable {
    next_key: u64,
    handles: HashMap<u64, AbortHandle>,
}

impl TaskTable {
    fn insert(&mut self, handle: AbortHandle) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.handles.insert(key, handle);
        key
    }
}

/// Removes its task's handle from the table when dropped.
struct Registration {
    tasks: Arc<Mutex<TaskTable>>,
    key: u64,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.handles.remove(&self.key);
        }
    }
}

#[derive(Clone, Debug)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
    tasks: Arc<Mutex<TaskTable>>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)), tasks: Arc::new(Mutex::new(TaskTable::default())) }
    }

    /// Create a scope that closes when the current reactive owner is cleaned up.
    pub fn install() -> Self {
        let scope = Self::new();
        let on_close = scope.clone();
        leptos::prelude::on_cleanup(move || on_close.close());
        scope
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the scope dead and abort every task still registered.
    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
        if let Ok(mut tasks) = self.tasks.lock() {
            for (_, handle) in tasks.handles.drain() {
                handle.abort();
            }
        }
    }

    /// Wrap `fut` so it resolves to `None` instead of running to completion
    /// once the scope has closed.
    pub fn guard<F>(&self, fut: F) -> impl Future<Output = Option<F::Output>> + use<F>
    where
        F: Future,
    {
        let (handle, abort_registration) = AbortHandle::new_pair();
        let mut registration = None;
        if self.is_alive() {
            if let Ok(mut tasks) = self.tasks.lock() {
                let key = tasks.insert(handle);
                registration = Some(Registration { tasks: self.tasks.clone(), key });
            }
        } else {
            handle.abort();
        }
        let alive = self.alive.clone();
        async move {
            let _registration = registration;
            let output = Abortable::new(fut, abort_registration).await.ok()?;
            alive.load(Ordering::Relaxed).then_some(output)
        }
    }

    /// Run `fut` on the UI task queue for as long as the scope is alive.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let guarded = self.guard(fut);
        spawn_detached(async move {
            let _ = guarded.await;
        });
    }
}

/// Spawn a UI task that is not tied to any view (app-lifetime work).
///
/// Tasks only run in the browser; during server rendering they are dropped
/// and views render their initial (loading) state.
pub fn spawn_detached<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(fut);
    }
}
