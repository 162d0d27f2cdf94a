pub mod catalog_client;
pub mod poller;

pub use catalog_client::*;
pub use poller::*;
