use std::sync::{Arc, RwLock};

use super::invalidation::request_frame;

/// A value shared between a widget, its gesture callbacks, and the handle
/// given to its owner.
///
/// Cloning a `SharedValue` shares the underlying cell. Reads and writes are
/// safe from any thread; the frame host guarantees that only one widget
/// callback runs at a time, the lock only covers handles used from other
/// threads. Writes that change the value request a new frame.
pub struct SharedValue<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for SharedValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> SharedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Borrow the value for reading
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Check whether two handles point at the same cell
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> SharedValue<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T: PartialEq> SharedValue<T> {
    /// Sets the value, only requesting a frame if it actually changed.
    pub fn set(&self, value: T) {
        let Ok(mut guard) = self.inner.write() else {
            return; // Lock poisoned, skip update silently
        };
        if *guard != value {
            *guard = value;
            drop(guard);
            request_frame();
        }
    }
}

impl<T: PartialEq + Clone> SharedValue<T> {
    /// Updates the value using a closure, only requesting a frame if it changed.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let Ok(mut guard) = self.inner.write() else {
            let mut scratch = self.get();
            return f(&mut scratch);
        };
        let old_value = guard.clone();
        let result = f(&mut guard);
        if *guard != old_value {
            drop(guard);
            request_frame();
        }
        result
    }
}

impl<T: Default> Default for SharedValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| f.debug_tuple("SharedValue").field(value).finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let value = SharedValue::new(42);
        assert_eq!(value.get(), 42);
    }

    #[test]
    fn test_set_updates_value() {
        let value = SharedValue::new(10);
        value.set(20);
        assert_eq!(value.get(), 20);
    }

    #[test]
    fn test_update_with_closure() {
        let value = SharedValue::new(5);
        value.update(|v| *v += 10);
        assert_eq!(value.get(), 15);
    }

    #[test]
    fn test_update_returns_closure_result() {
        let value = SharedValue::new(vec![1, 2, 3]);
        let popped = value.update(|v| v.pop());
        assert_eq!(popped, Some(3));
        assert_eq!(value.get(), vec![1, 2]);
    }

    #[test]
    fn test_with_for_borrowing() {
        let value = SharedValue::new(String::from("hello"));
        let length = value.with(|s| s.len());
        assert_eq!(length, 5);
    }

    #[test]
    fn test_clone_shares_underlying_value() {
        let first = SharedValue::new(50);
        let second = first.clone();

        first.set(75);
        assert_eq!(second.get(), 75);

        second.set(100);
        assert_eq!(first.get(), 100);
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn test_separate_values_are_distinct() {
        let first = SharedValue::new(1);
        let second = SharedValue::new(1);
        assert!(!first.ptr_eq(&second));
    }

    #[test]
    fn test_shared_across_threads() {
        let value = SharedValue::new(0);
        let writer = value.clone();

        std::thread::spawn(move || writer.set(7))
            .join()
            .unwrap();

        assert_eq!(value.get(), 7);
    }

    #[test]
    fn test_value_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedValue<f32>>();
    }
}
