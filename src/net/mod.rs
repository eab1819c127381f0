//! Network layer: client construction, the launch endpoints and the generic
//! dispatch that routes outcomes back to a presenter.

pub mod api;
pub mod dispatch;
pub mod error;
pub mod interceptor;
pub mod manager;

pub use api::{ApiResponse, ApiService, ApiTag, LaunchApi, LaunchRequest};
pub use dispatch::Delivery;
pub use error::NetError;
pub use manager::NetManager;
