use log::warn;

use crate::config::ThemeOptions;
use crate::utils::error::ThemeError;

/// Validate the theme options
pub fn validate_options(options: &ThemeOptions) -> Result<(), ThemeError> {
    validate_reformat_modes(options)?;
    validate_globaltoc(options);
    validate_version_dropdown(options);
    Ok(())
}

/// Minification and prettification rewrite the same files and exclude each other
pub fn validate_reformat_modes(options: &ThemeOptions) -> Result<(), ThemeError> {
    if options.html_minify && options.html_prettify {
        return Err(ThemeError::Config(
            "html_minify and html_prettify cannot both be True".to_string(),
        ));
    }
    Ok(())
}

fn validate_globaltoc(options: &ThemeOptions) {
    if options.globaltoc_depth == 0 || options.globaltoc_depth < -1 {
        warn!(
            "globaltoc_depth {} hides the whole global navigation; use -1 for unlimited",
            options.globaltoc_depth
        );
    }
}

fn validate_version_dropdown(options: &ThemeOptions) {
    if options.version_dropdown && options.version_info.is_none() && options.version_json.is_none() {
        warn!("version_dropdown is set but neither version_info nor version_json is configured");
    }
}
