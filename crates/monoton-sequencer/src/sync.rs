#[cfg(not(loom))]
pub(crate) use parking_lot::Mutex;

/// Gives other callers a chance while a time unit is exhausted.
#[cfg(not(loom))]
pub(crate) fn pause(nanos: u64) {
    std::thread::sleep(std::time::Duration::from_nanos(nanos));
}

#[cfg(loom)]
pub(crate) fn pause(_nanos: u64) {
    loom::thread::yield_now();
}

/// Exposes loom's mutex with the `parking_lot` signature.
#[cfg(loom)]
pub(crate) struct Mutex<T>(loom::sync::Mutex<T>);

#[cfg(loom)]
impl<T> Mutex<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(loom::sync::Mutex::new(value))
    }

    pub(crate) fn lock(&self) -> loom::sync::MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
