//! Presenter contract shared by every screen, plus the foreground queue and
//! cancellation handles it relies on.

pub mod disposable;
pub mod looper;

pub use disposable::{CompositeDisposable, Disposable};
pub use looper::{main_looper, Looper, MainThread};

use crate::net::{ApiResponse, ApiTag, Delivery, NetError};

/// Extra context a caller attaches to a dispatch; handed back untouched to
/// `on_success`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extras {
    /// Set by `NetManager::net_work_by_consumer`.
    pub data_type: Option<i32>,
    pub values: Vec<serde_json::Value>,
}

impl Extras {
    pub fn with_values(values: Vec<serde_json::Value>) -> Self {
        Self {
            data_type: None,
            values,
        }
    }
}

/// Callback side of a dispatch.
///
/// `add_observer` is called on the caller's context before the work starts;
/// `on_success` / `on_failed` only ever run on the foreground queue, through
/// `Delivery::deliver`.
pub trait CommonPresenter {
    /// The screen's foreground event type.
    type Event: From<Delivery> + Send + 'static;

    fn main_thread(&self) -> MainThread<Self::Event>;

    fn add_observer(&mut self, disposable: Disposable);

    fn on_success(&mut self, tag: ApiTag, response: ApiResponse, extras: &Extras);

    fn on_failed(&mut self, tag: ApiTag, error: &NetError);
}
