pub mod error;
pub mod helper;
pub mod path;

pub use error::Error;
