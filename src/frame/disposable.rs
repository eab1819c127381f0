//! Cancellation handles for in-flight work.

use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Handle to one cancellable unit of work (a dispatch or a countdown).
/// Clones share the same token; disposing twice is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Disposable {
    token: CancellationToken,
}

impl Disposable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispose(&self) {
        self.token.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the handle is disposed.
    pub fn disposed(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

/// Owns every handle a screen registered. Everything still pending is
/// disposed on `clear` and when the bag is dropped.
#[derive(Debug, Default)]
pub struct CompositeDisposable {
    items: Vec<Disposable>,
    cleared: bool,
}

impl CompositeDisposable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `disposable`. Adding to a cleared bag disposes it immediately.
    pub fn add(&mut self, disposable: Disposable) {
        if self.cleared {
            disposable.dispose();
            return;
        }
        self.items.retain(|d| !d.is_disposed());
        self.items.push(disposable);
    }

    /// Handles not yet disposed.
    pub fn pending(&self) -> usize {
        self.items.iter().filter(|d| !d.is_disposed()).count()
    }

    pub fn clear(&mut self) {
        self.cleared = true;
        for item in self.items.drain(..) {
            item.dispose();
        }
    }
}

impl Drop for CompositeDisposable {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispose_is_idempotent() {
        let d = Disposable::new();
        d.dispose();
        d.dispose();
        assert!(d.is_disposed());
    }

    #[test]
    fn clones_share_state() {
        let d = Disposable::new();
        let other = d.clone();
        other.dispose();
        assert!(d.is_disposed());
    }

    #[test]
    fn clear_disposes_everything() {
        let mut bag = CompositeDisposable::new();
        let a = Disposable::new();
        let b = Disposable::new();
        bag.add(a.clone());
        bag.add(b.clone());
        assert_eq!(bag.pending(), 2);

        bag.clear();
        assert!(a.is_disposed());
        assert!(b.is_disposed());
        assert_eq!(bag.pending(), 0);
    }

    #[test]
    fn add_after_clear_disposes_right_away() {
        let mut bag = CompositeDisposable::new();
        bag.clear();
        let late = Disposable::new();
        bag.add(late.clone());
        assert!(late.is_disposed());
    }

    #[test]
    fn drop_releases_handles() {
        let d = Disposable::new();
        {
            let mut bag = CompositeDisposable::new();
            bag.add(d.clone());
        }
        assert!(d.is_disposed());
    }

    #[test]
    fn completed_handles_are_pruned() {
        let mut bag = CompositeDisposable::new();
        let done = Disposable::new();
        bag.add(done.clone());
        done.dispose();
        bag.add(Disposable::new());
        assert_eq!(bag.items.len(), 1);
    }
}
