//! The launch screens: splash/guide and subject selection.
//!
//! Each screen is driven by its own `Looper`; `run` consumes the screen and
//! returns once it has finished or been destroyed.

pub mod countdown;
pub mod guide;
pub mod route;
pub mod subject;

pub use countdown::{Countdown, TickAction};
pub use guide::{GuideClick, GuideEvent, GuideScreen, GuideView};
pub use route::route;
pub use subject::{SubjectEvent, SubjectScreen, SubjectView};

/// Where the guide screen can send the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Subject,
    Login,
    Home,
}

/// Screen transitions, implemented by the hosting shell.
pub trait Navigator: Send {
    fn start(&mut self, destination: Destination);

    /// Close the current screen and drop it from the back stack.
    fn finish(&mut self);
}
