mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Model, Property, Schema};

/// A Result type alias that uses Schemata's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
