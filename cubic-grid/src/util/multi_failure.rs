use alloc::boxed::Box;
use alloc::vec::Vec;
use std::panic;

/// Collects panics from several checks, then panics once when dropped if any occurred.
///
/// Tests which loop over every side, rotation, or edge use this to report all failing
/// cases rather than only the first.
#[derive(Debug, Default)]
pub struct MultiFailure {
    panics: Vec<Box<dyn core::any::Any + Send>>,
}

impl MultiFailure {
    /// Constructs an empty [`MultiFailure`], which does nothing unless failures are caught.
    #[inline(never)]
    #[must_use = "this is useless if never invoked to collect failures"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `body` with a fresh [`MultiFailure`] and reports its failures at the end.
    #[inline(never)]
    pub fn run(body: impl FnOnce(&mut MultiFailure)) {
        let mut failures = Self::new();
        body(&mut failures);
    }

    /// Calls `f`; if it panics, records the failure and returns [`None`].
    #[inline(never)]
    pub fn catch<O, F>(&mut self, f: F) -> Option<O>
    where
        F: FnOnce() -> O + panic::UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(output) => Some(output),
            Err(payload) => {
                // The panic hook has already printed the message.
                self.panics.push(payload);
                None
            }
        }
    }

    /// Number of failures recorded so far.
    #[inline]
    pub fn failure_count(&self) -> usize {
        self.panics.len()
    }
}

impl Drop for MultiFailure {
    #[inline(never)]
    fn drop(&mut self) {
        if std::thread::panicking() || self.panics.is_empty() {
            return;
        }
        let count = self.panics.len();
        let summary = format!(
            "{count} failure{s} caught",
            s = if count == 1 { " was" } else { "s were" }
        );
        std::eprintln!("\n{summary}");
        // resume_unwind() skips the panic hook, so the summary is not printed twice.
        panic::resume_unwind(Box::new(summary));
    }
}

#[cfg(test)]
mod tests {
    use super::{panic, *};

    #[test]
    fn no_failures() {
        MultiFailure::run(|mf| {
            assert_eq!(mf.catch(|| 1 + 1), Some(2));
            assert_eq!(mf.failure_count(), 0);
        });
    }

    #[test]
    #[should_panic = "3 failures were caught"]
    fn several_failures() {
        MultiFailure::run(|mf| {
            for i in 0..4 {
                mf.catch(|| {
                    assert!(i == 2, "case {i}");
                });
            }
            assert_eq!(mf.failure_count(), 3);
        });
    }

    #[test]
    fn payload_is_kept() {
        let mut mf = MultiFailure::new();
        let result = mf.catch(|| -> u8 { panic::panic_any(7u8) });
        assert_eq!(result, None);
        let payload = mf.panics.pop().unwrap();
        assert_eq!(payload.downcast_ref::<u8>(), Some(&7));
    }
}
