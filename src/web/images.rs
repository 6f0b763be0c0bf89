use std::io::ErrorKind;
use std::path::Path as FsPath;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use log::{debug, warn};

use crate::quiz::{animals, is_plain_file_name};
use crate::web::page::escape_html;
use crate::web::{AppState, WebError};

/// Serves a catalog image from the assets directory, or a generated
/// placeholder when the file is not there.
pub async fn serve_image(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, WebError> {
    if !is_plain_file_name(&file) {
        return Err(WebError::NotFound);
    }
    let entry = state
        .catalog
        .find_by_image(&file)
        .ok_or(WebError::NotFound)?;

    let path = state.assets_dir.join(&entry.image);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, content_type(&file))], bytes).into_response()),
        Err(err) => {
            if err.kind() == ErrorKind::NotFound {
                debug!("No file at {}, serving placeholder", path.display());
            } else {
                warn!("Failed to read {}: {}, serving placeholder", path.display(), err);
            }
            let label = animals::english_label(&entry.image).unwrap_or(entry.name.as_str());
            Ok((
                [(header::CONTENT_TYPE, "image/svg+xml")],
                placeholder_svg(label),
            )
                .into_response())
        }
    }
}

fn content_type(file: &str) -> &'static str {
    let extension = FsPath::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

pub fn placeholder_svg(label: &str) -> String {
    // Long labels need a smaller font to fit the 400px width.
    let font_size = if label.chars().count() > 12 { 28 } else { 36 };
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='400' height='300'>\
<rect fill='#dddddd' width='100%' height='100%'/>\
<text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' font-size='{}' fill='#000000'>{}</text>\
</svg>",
        font_size,
        escape_html(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_follow_extension() {
        assert_eq!(content_type("a.JPG"), "image/jpeg");
        assert_eq!(content_type("a.svg"), "image/svg+xml");
        assert_eq!(content_type("a"), "application/octet-stream");
    }

    #[test]
    fn placeholder_has_label() {
        let svg = placeholder_svg("Masked Palm Civet");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">Masked Palm Civet</text>"));
        assert!(svg.contains("font-size='28'"));
        assert!(placeholder_svg("Tanuki").contains("font-size='36'"));
    }
}
