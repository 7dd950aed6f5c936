//! Reference id extraction from marvel.com issue pages

use regex::Regex;
use std::sync::OnceLock;

fn reference_pattern() -> &'static Regex {
    static RE_REFERENCE: OnceLock<Regex> = OnceLock::new();
    RE_REFERENCE
        .get_or_init(|| Regex::new(r"^https?://.*(marvel\.com)/comics/issue/([0-9]+).*$").unwrap())
}

/// Extract the numeric issue id from a marvel.com issue page address
///
/// `https://www.marvel.com/comics/issue/10766/spider-man` yields `10766`.
/// Any other address yields `None`.
pub fn extract_reference_id(web_address: &str) -> Option<String> {
    log::debug!("Parsing web address: {}", web_address);
    reference_pattern()
        .captures(web_address)
        .and_then(|caps| caps.get(2))
        .map(|id| id.as_str().to_string())
}

/// True when the address points at an issue page this adaptor understands
pub fn is_supported_reference(web_address: &str) -> bool {
    reference_pattern().is_match(web_address)
}
