//! Write-once per-key slots.
//!
//! The map lock is held only long enough to find, create or drop a key's
//! slot; it is never held while waiting on a slot. Computation happens
//! under the slot's own `init` lock, so distinct keys never wait on each
//! other and a key is computed at most once. The stored value sits behind a
//! separate `RwLock` that is only write-locked to publish, so reading it
//! never waits on a computation in progress.

use std::sync::Arc;

use mutdet_ir::Dotted;
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;

struct Slot<T> {
    init: Mutex<()>,
    value: RwLock<Option<Arc<T>>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot {
            init: Mutex::new(()),
            value: RwLock::new(None),
        }
    }
}

impl<T> Slot<T> {
    fn get(&self) -> Option<Arc<T>> {
        self.value.read().as_ref().map(Arc::clone)
    }
}

pub(crate) struct SlotMap<T> {
    slots: Mutex<FxHashMap<Dotted, Arc<Slot<T>>>>,
}

impl<T> SlotMap<T> {
    pub(crate) fn new() -> Self {
        SlotMap {
            slots: Mutex::new(FxHashMap::default()),
        }
    }

    fn slot(&self, key: &Dotted) -> Arc<Slot<T>> {
        let mut slots = self.slots.lock();
        Arc::clone(slots.entry(key.clone()).or_default())
    }

    /// Return the stored value for `key`, computing it with `init` if the
    /// slot is empty. An `Err` from `init` leaves no value behind, and the
    /// slot itself is dropped unless another caller is waiting on it.
    pub(crate) fn get_or_try_init<E>(
        &self,
        key: &Dotted,
        init: impl FnOnce() -> Result<T, E>,
    ) -> Result<Arc<T>, E> {
        let slot = self.slot(key);
        if let Some(value) = slot.get() {
            return Ok(value);
        }
        let _guard = slot.init.lock();
        if let Some(value) = slot.get() {
            return Ok(value);
        }
        match init() {
            Ok(value) => {
                let value = Arc::new(value);
                *slot.value.write() = Some(Arc::clone(&value));
                Ok(value)
            }
            Err(err) => {
                self.release_empty(key, &slot);
                Err(err)
            }
        }
    }

    /// Drop `slot` from the map if nobody else holds it. Slots are only
    /// cloned under the map lock, so the count cannot grow while it is held.
    fn release_empty(&self, key: &Dotted, slot: &Arc<Slot<T>>) {
        let mut slots = self.slots.lock();
        let unshared = slots
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && Arc::strong_count(slot) == 2);
        if unshared {
            slots.remove(key);
        }
    }

    /// Keys whose slot holds a value. Slots still computing are not counted
    /// and are never waited on.
    pub(crate) fn filled_keys(&self) -> Vec<Dotted> {
        let snapshot: Vec<(Dotted, Arc<Slot<T>>)> = {
            let slots = self.slots.lock();
            slots
                .iter()
                .map(|(key, slot)| (key.clone(), Arc::clone(slot)))
                .collect()
        };
        snapshot
            .into_iter()
            .filter(|(_, slot)| slot.value.read().is_some())
            .map(|(key, _)| key)
            .collect()
    }

    /// Number of keys with a slot, filled or not.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.lock().len()
    }
}
