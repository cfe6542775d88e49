//! Unofficial client for the OpenSea v1 HTTP API.

mod client;
mod decode;
mod errors;
mod query;
mod transport;
pub mod types;

pub use self::client::{Client, Network};
pub use self::errors::Error;
pub use self::query::{AssetQuery, OrderDirection};
pub use tokio_util::sync::CancellationToken;
