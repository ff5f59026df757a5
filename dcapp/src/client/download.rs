use dccore::error::ClientError;
use js_sys::{
    Array,
    Uint8Array,
};
use wasm_bindgen::{
    JsCast,
    JsValue,
};
use web_sys::{
    Blob,
    BlobPropertyBag,
    HtmlAnchorElement,
    Url,
};

fn browser(e: JsValue) -> ClientError {
    ClientError::Browser(format!("{e:?}"))
}

/// Offer `bytes` to the user as a file named `filename`, through a
/// temporary object URL and a synthesized click on a download link.
pub(super) fn save(bytes: &[u8], filename: &str) -> Result<(), ClientError> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(browser)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let document = leptos::prelude::document();
    let body = document.body()
        .ok_or_else(|| ClientError::Browser("document has no body".to_string()))?;
    let anchor = document.create_element("a")
        .map_err(browser)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| browser(e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(browser)?;
    anchor.click();
    body.remove_child(&anchor).map_err(browser)?;
    Url::revoke_object_url(&url).map_err(browser)
}
