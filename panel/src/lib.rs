pub mod app;
pub mod console;
pub mod dispatch;
#[cfg(test)]
mod fake_device;
pub mod feedback;
pub mod host;
pub mod http;
pub mod sync;

pub use app::Panel;
pub use http::{HttpClient, HttpError, HttpResult};
