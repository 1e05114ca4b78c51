use std::path::{Path, PathBuf};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use log::{debug, info};

use crate::utils::error::ThemeError;
use crate::utils::fs::rewrite_file;

/// Minify a stylesheet
pub fn minify_css(css: &str) -> Result<String, ThemeError> {
    let sheet = StyleSheet::parse(
        css,
        ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        },
    )
    .map_err(|e| ThemeError::Css(e.to_string()))?;

    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| ThemeError::Css(e.to_string()))?;

    Ok(printed.code)
}

/// Every stylesheet below the output directory
pub fn find_css_files(outdir: &Path) -> Result<Vec<PathBuf>, ThemeError> {
    let pattern = outdir.join("**").join("*.css");
    let pattern = pattern.to_string_lossy();

    let paths = glob::glob(&pattern).map_err(|e| ThemeError::Css(format!("Invalid pattern {}: {}", pattern, e)))?;
    let mut files: Vec<PathBuf> = paths.filter_map(Result::ok).collect();
    files.sort();
    Ok(files)
}

/// Minify every stylesheet below the output directory in place
pub fn minify_css_files(outdir: &Path) -> Result<usize, ThemeError> {
    let files = find_css_files(outdir)?;
    info!("Minifying {} css files", files.len());

    for file in &files {
        debug!("minifying css file {}", file.display());
        rewrite_file(file, minify_css)?;
    }

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::{read_file, write_file};

    #[test]
    fn test_minify_css() {
        assert_eq!(minify_css("a {\n  color: red;\n}\n").unwrap(), "a{color:red}");
    }

    #[test]
    fn test_minify_css_files() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path().join("_static/theme.css"), "p {\n  margin: 0;\n}\n").unwrap();
        write_file(dir.path().join("_static/deep/extra.css"), "em {  color: blue; }").unwrap();
        write_file(dir.path().join("index.html"), "<p> keep </p>").unwrap();

        assert_eq!(minify_css_files(dir.path()).unwrap(), 2);
        assert_eq!(read_file(dir.path().join("_static/theme.css")).unwrap(), "p{margin:0}");
        assert_eq!(read_file(dir.path().join("_static/deep/extra.css")).unwrap(), "em{color:#00f}");
        assert_eq!(read_file(dir.path().join("index.html")).unwrap(), "<p> keep </p>");
    }
}
