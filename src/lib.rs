//! Launch flow of the subject study app.
//!
//! * `screens::guide` — splash advert, countdown and the three-way route.
//! * `screens::subject` — subject list from cache or server.
//! * `net` — HTTP client, endpoints and the dispatch that brings results back
//!   to a screen's foreground queue.

pub mod app;
pub mod config;
pub mod data;
pub mod frame;
pub mod logging;
pub mod model;
pub mod net;
pub mod screens;
pub mod session;
pub mod storage;

pub use app::App;
pub use config::AppConfig;
pub use screens::Destination;
