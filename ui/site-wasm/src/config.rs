use lc_site_core::SiteConfig;
use tracing::warn;
use web_sys::Document;

/// Read the page's `#siteConfig` JSON block, falling back to defaults when it
/// is absent or invalid.
pub fn load(doc: &Document) -> SiteConfig {
    let Some(raw) = doc
        .get_element_by_id("siteConfig")
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        warn!(%err, "ignoring #siteConfig");
        SiteConfig::default()
    })
}
