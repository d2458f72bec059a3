//! Scoped provider sessions.
//!
//! Providers that own native resources (memory-mapped kernels, library
//! handles) release them in `Drop`. [`with_provider`] ties that release to
//! the end of a batch of work: the provider is dropped on success, on error,
//! and while unwinding from a panic.

use tracing::debug;

/// Open a provider, run `work` against it, and release it.
///
/// If `open` fails, `work` is never called.
pub fn with_provider<P, T, E, O, W>(open: O, work: W) -> Result<T, E>
where
    O: FnOnce() -> Result<P, E>,
    W: FnOnce(&P) -> Result<T, E>,
{
    let provider = open()?;
    debug!(provider = std::any::type_name::<P>(), "provider session opened");
    let result = work(&provider);
    drop(provider);
    debug!(ok = result.is_ok(), "provider session closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandle {
        released: Arc<AtomicUsize>,
    }

    impl Drop for CountingHandle {
        fn drop(&mut self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn opener(
        released: &Arc<AtomicUsize>,
    ) -> impl FnOnce() -> Result<CountingHandle, String> + use<> {
        let released = Arc::clone(released);
        move || Ok(CountingHandle { released })
    }

    #[test]
    fn released_after_success() {
        let released = Arc::new(AtomicUsize::new(0));
        let out: Result<u32, String> = with_provider(opener(&released), |_| Ok(7));
        assert_eq!(out, Ok(7));
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn released_after_error() {
        let released = Arc::new(AtomicUsize::new(0));
        let out: Result<u32, String> =
            with_provider(opener(&released), |_| Err("batch failed".to_string()));
        assert!(out.is_err());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn released_during_panic() {
        let released = Arc::new(AtomicUsize::new(0));
        let open = opener(&released);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _: Result<(), String> = with_provider(open, |_| panic!("provider blew up"));
        }));
        assert!(outcome.is_err());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn work_skipped_when_open_fails() {
        let mut ran = false;
        let out: Result<(), String> = with_provider(
            || Err::<CountingHandle, _>("no kernel".to_string()),
            |_| {
                ran = true;
                Ok(())
            },
        );
        assert_eq!(out, Err("no kernel".to_string()));
        assert!(!ran);
    }
}
