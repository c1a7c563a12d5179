use web_sys::Document;

use folio_core::PageConfig;

pub(crate) const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Reads the JSON block `<script type="application/json" id="folio-config">`.
/// A missing block means defaults; a broken one is reported and ignored.
pub(crate) fn load_page_config(document: &Document) -> PageConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("config: using defaults", err.to_string());
            PageConfig::default()
        }
    }
}
