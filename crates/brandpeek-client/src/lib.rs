pub mod client;
pub mod error;

pub use client::{BrandClient, BRANDS_PATH};
pub use error::FetchError;
