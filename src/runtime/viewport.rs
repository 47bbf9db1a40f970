use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::foundation::core::Viewport;

/// Handle of one resize subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResizeSubscription(pub u64);

/// Display capability a mounted background depends on: query the current size and learn about
/// size changes.
///
/// Resizes are polled with [`ViewportAdapter::take_resize`] at the start of a frame, so cached
/// dimensions are never replaced mid-draw.
pub trait ViewportAdapter {
    fn current(&self) -> Viewport;

    fn subscribe(&mut self) -> ResizeSubscription;

    fn unsubscribe(&mut self, sub: ResizeSubscription);

    /// The latest viewport if it changed since the last call for `sub`.
    fn take_resize(&mut self, sub: ResizeSubscription) -> Option<Viewport>;
}

/// A viewport that never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport {
    viewport: Viewport,
    next_id: u64,
}

impl FixedViewport {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            next_id: 1,
        }
    }
}

impl ViewportAdapter for FixedViewport {
    fn current(&self) -> Viewport {
        self.viewport
    }

    fn subscribe(&mut self) -> ResizeSubscription {
        let sub = ResizeSubscription(self.next_id);
        self.next_id += 1;
        sub
    }

    fn unsubscribe(&mut self, _sub: ResizeSubscription) {}

    fn take_resize(&mut self, _sub: ResizeSubscription) -> Option<Viewport> {
        None
    }
}

#[derive(Debug)]
struct SharedState {
    viewport: Viewport,
    next_id: u64,
    // subscription -> resized since last poll
    subscribers: BTreeMap<ResizeSubscription, bool>,
}

/// Clonable viewport handle; one clone is given to the mount, another stays with the host and
/// reports resizes.
#[derive(Clone, Debug)]
pub struct SharedViewport {
    inner: Arc<Mutex<SharedState>>,
}

impl SharedViewport {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SharedState {
                viewport,
                next_id: 1,
                subscribers: BTreeMap::new(),
            })),
        }
    }

    /// Replace the viewport and mark every live subscription dirty.
    pub fn resize(&self, viewport: Viewport) {
        let mut state = self.lock();
        state.viewport = viewport;
        for dirty in state.subscribers.values_mut() {
            *dirty = true;
        }
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            subscribers = state.subscribers.len(),
            "viewport resized"
        );
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ViewportAdapter for SharedViewport {
    fn current(&self) -> Viewport {
        self.lock().viewport
    }

    fn subscribe(&mut self) -> ResizeSubscription {
        let mut state = self.lock();
        let sub = ResizeSubscription(state.next_id);
        state.next_id += 1;
        state.subscribers.insert(sub, false);
        sub
    }

    fn unsubscribe(&mut self, sub: ResizeSubscription) {
        self.lock().subscribers.remove(&sub);
    }

    fn take_resize(&mut self, sub: ResizeSubscription) -> Option<Viewport> {
        let mut state = self.lock();
        let viewport = state.viewport;
        let dirty = state.subscribers.get_mut(&sub)?;
        std::mem::take(dirty).then_some(viewport)
    }
}
