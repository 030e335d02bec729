//! Page Configuration
//!
//! Overrides come from `<meta name="item-sync:KEY" content="...">` tags.

use item_sync::ClientConfig;

const META_PREFIX: &str = "item-sync:";

fn meta_content(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}{}\"]", META_PREFIX, key);
    document.query_selector(&selector).ok()??.get_attribute("content")
}

/// Read the configuration, falling back to defaults on bad input
pub fn load() -> ClientConfig {
    match ClientConfig::from_lookup(meta_content) {
        Ok(config) => {
            log::debug!("Using items API at {}", config.api_base);
            config
        }
        Err(err) => {
            log::warn!("Ignoring page configuration: {}", err);
            ClientConfig::default()
        }
    }
}
