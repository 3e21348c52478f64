//! Document rendering and output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::XrayConfig;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Pretty JSON with two-space indentation and a trailing newline.
pub fn render(config: &XrayConfig) -> Result<String, WriteError> {
    let mut rendered = serde_json::to_string_pretty(config)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the document to `path`.
///
/// The content goes to a sibling temporary file first and is renamed into
/// place, so readers never observe a partially written configuration.
pub fn write_document(path: &Path, config: &XrayConfig) -> Result<(), WriteError> {
    let rendered = render(config)?;
    let io_error = |source: std::io::Error| WriteError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let staging = staging_path(path);
    let result = fs::File::create(&staging)
        .and_then(|mut file| {
            file.write_all(rendered.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staging, path));

    if let Err(source) = result {
        let _ = fs::remove_file(&staging);
        return Err(io_error(source));
    }

    tracing::info!(path = %path.display(), bytes = rendered.len(), "Configuration written");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
