//! Reading a picked file out of an `<input type="file">` change event.

use api::images::image_mime;
use api::FileUpload;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::prelude::*;

/// The first file of the event, or `None` when nothing was picked or it
/// could not be read. Unknown extensions get a non-image MIME type so that
/// [`FileUpload::is_image`] rejects them.
pub async fn read_picked_file(evt: FormEvent) -> Option<FileUpload> {
    let engine = evt.files()?;
    let file_name = engine.files().into_iter().next()?;
    let Some(bytes) = engine.read_file(&file_name).await else {
        tracing::warn!("Could not read picked file {}", file_name);
        return None;
    };
    let mime = image_mime(&file_name).unwrap_or("application/octet-stream");
    Some(FileUpload { file_name, mime: mime.to_string(), bytes })
}

/// `data:` URL for previewing an upload before it is sent.
pub fn preview_url(file: &FileUpload) -> String {
    format!("data:{};base64,{}", file.mime, STANDARD.encode(&file.bytes))
}
