use std::path::Path;

use glob::{glob, Pattern};
use log::{debug, warn};

use crate::error::GenerateError;

/// Extensions accepted for a hero image, compared case-insensitively
pub const HERO_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Find `{name}.png|jpg|jpeg` in `dir`.
///
/// Returns the file name of the first match in sorted order, or `None` when
/// the recipe has no image.
pub fn find_hero_image(dir: &Path, name: &str) -> Result<Option<String>, GenerateError> {
    let pattern = format!(
        "{}/{}.*",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(name)
    );
    debug!("Looking for hero image with pattern {}", pattern);

    for entry in glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                continue;
            }
        };
        if !has_hero_extension(&path) || !path.is_file() {
            continue;
        }
        if let Some(file_name) = path.file_name().and_then(|f| f.to_str()) {
            debug!("Selected hero image {}", path.display());
            return Ok(Some(file_name.to_string()));
        }
    }

    warn!("No image found for {}; pages will be rendered without one", name);
    Ok(None)
}

fn has_hero_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            HERO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
