mod defaults;
mod loader;
mod types;
mod validation;

pub use defaults::{default_source_ref, default_theme_options, merge_all, merge_values};
pub use loader::{load_theme_options, parse_options_file};
pub use types::*;
pub use validation::{validate_options, validate_reformat_modes};
