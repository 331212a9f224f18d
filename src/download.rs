//! Browser-side output destination: saves the header through a download link.

use gloo_timers::callback::Timeout;
use kconfig_gen::config::{DOWNLOAD_REVOKE_DELAY_MS, HEADER_MIME_TYPE};
use kconfig_gen::OutputDestination;
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offers the rendered header to the user as a file download.
pub struct BrowserDownload;

#[derive(Debug)]
pub struct DownloadError(String);

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DownloadError {}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        DownloadError(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl OutputDestination for BrowserDownload {
    type Error = DownloadError;

    fn write_header(&mut self, file_name: &str, contents: &str) -> Result<(), DownloadError> {
        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = BlobPropertyBag::new();
        options.set_type(HEADER_MIME_TYPE);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

        let url = Url::create_object_url_with_blob(&blob)?;
        let anchor: HtmlAnchorElement = gloo_utils::document()
            .create_element("a")?
            .dyn_into()
            .map_err(|_| DownloadError("Could not create download link".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        // Releasing the URL right after the click can cancel the download.
        Timeout::new(DOWNLOAD_REVOKE_DELAY_MS, move || {
            if let Err(e) = Url::revoke_object_url(&url) {
                log::warn!("Failed to revoke download URL: {:?}", e);
            }
        })
        .forget();
        Ok(())
    }
}
