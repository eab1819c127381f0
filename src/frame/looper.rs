//! Foreground event queue.
//!
//! Each screen drains one `Looper` on a single task, so everything it handles
//! (network outcomes, countdown ticks, taps) runs one event at a time.
//! Background work talks to it only through `MainThread::post`.

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub fn main_looper<E>() -> (MainThread<E>, Looper<E>) {
    let (tx, rx) = unbounded_channel();
    (MainThread { tx }, Looper { rx })
}

/// Posting side of a screen's queue.
#[derive(Debug)]
pub struct MainThread<E> {
    tx: UnboundedSender<E>,
}

impl<E> Clone for MainThread<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<E> MainThread<E> {
    /// Queue `event`. Returns `false` once the screen has gone away.
    pub fn post(&self, event: E) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving side, owned by the screen's run loop.
#[derive(Debug)]
pub struct Looper<E> {
    rx: UnboundedReceiver<E>,
}

impl<E> Looper<E> {
    pub async fn next(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Non-blocking poll.
    pub fn try_next(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }
}
