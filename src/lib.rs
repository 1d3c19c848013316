//! Japanese postal code lookup backed by the teraren postcode API, with an
//! in-memory cache of resolved addresses.

pub mod cache;
pub mod client;
pub mod error;
pub mod postal_code;
pub mod prefecture;
pub mod schema;

pub use cache::{AddressCache, InMemoryCache};
pub use client::{Client, ClientConfig};
pub use error::{Error, ErrorKind};
pub use postal_code::PostalCode;
pub use prefecture::PREFECTURES;
pub use schema::Address;
