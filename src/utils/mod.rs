pub mod error;
pub mod fs;
pub mod path;
pub mod text;

pub use error::{BoxResult, ThemeError};
