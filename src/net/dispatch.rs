//! Background-to-foreground hand-off for a single dispatch.

use super::{ApiResponse, ApiTag, NetError};
use crate::frame::{CommonPresenter, Disposable, Extras};
use tracing::debug;

/// Terminal outcome of one dispatch, queued on the presenter's looper.
#[derive(Debug)]
pub struct Delivery {
    pub tag: ApiTag,
    pub outcome: Result<ApiResponse, NetError>,
    pub extras: Extras,
    disposable: Disposable,
}

impl Delivery {
    pub(crate) fn new(
        tag: ApiTag,
        outcome: Result<ApiResponse, NetError>,
        extras: Extras,
        disposable: Disposable,
    ) -> Self {
        Self {
            tag,
            outcome,
            extras,
            disposable,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.disposable.is_disposed()
    }

    /// Hand the outcome to exactly one of the presenter's handlers.
    ///
    /// A dispatch disposed after its outcome was queued is dropped here, so
    /// cancellation wins right up to the moment a handler runs. Returns whether
    /// a handler ran.
    pub fn deliver<P>(self, presenter: &mut P) -> bool
    where
        P: CommonPresenter + ?Sized,
    {
        if self.disposable.is_disposed() {
            debug!("dropping {} outcome, dispatch was cancelled", self.tag);
            return false;
        }
        // Completed: lets the presenter's bag prune it.
        self.disposable.dispose();

        match self.outcome {
            Ok(response) => presenter.on_success(self.tag, response, &self.extras),
            Err(error) => presenter.on_failed(self.tag, &error),
        }
        true
    }
}
