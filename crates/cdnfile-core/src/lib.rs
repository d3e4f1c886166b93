pub mod config;
pub mod logging;

pub mod catalog;
pub mod error;
pub mod library;
pub mod loader;
pub mod markup;
pub mod probe;
pub mod request;
pub mod validate;

pub use error::CdnError;
pub use library::{FileType, SOURCE_PREFIX};
pub use request::LibraryRequest;
