pub mod client;
pub mod error;
pub mod filter;

pub use client::TruckDataClient;
pub use error::DataError;
pub use filter::filter_active;
