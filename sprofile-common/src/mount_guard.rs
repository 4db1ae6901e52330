use std::cell::Cell;
use std::rc::Rc;

/// Shared flag tied to a component's mount lifetime.
///
/// Clones observe the same flag. The owning component calls [`release`] when
/// it unmounts; an async fetch holding a clone checks [`is_mounted`] before
/// applying its result, so a response arriving after unmount is dropped.
///
/// [`release`]: MountGuard::release
/// [`is_mounted`]: MountGuard::is_mounted
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Mark the owner as unmounted. Idempotent.
    pub fn release(&self) {
        self.mounted.set(false);
    }

    /// Run `apply` with `value` only while still mounted.
    /// Returns whether the value was applied.
    pub fn apply_if_mounted<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_mounted() {
            apply(value);
            true
        } else {
            false
        }
    }
}
