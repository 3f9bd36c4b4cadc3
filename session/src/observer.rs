//! Callback registry notified on every session state change.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::state::AuthState;

/// Handle returned by [`crate::SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn(&AuthState)>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, Callback)>>,
}

impl Subscribers {
    pub(crate) fn add(&self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, callback));
        id
    }

    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub(crate) fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Invoke every callback with `state`.
    ///
    /// The registry is snapshotted first so callbacks may subscribe or
    /// unsubscribe without tripping the `RefCell`.
    pub(crate) fn notify(&self, state: &AuthState) {
        let callbacks: Vec<Callback> = self.entries.borrow().iter().map(|(_, cb)| Rc::clone(cb)).collect();
        for callback in callbacks {
            callback(state);
        }
    }
}
