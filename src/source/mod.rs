pub mod client;
pub mod error;
pub mod types;

pub use client::DataClient;
pub use error::ClientError;
