use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::{BRAND, SUITE};
use crate::i18n::Language;

/// Gap kept between the fixed header and a section scrolled into view.
pub const HEADER_GAP: f64 = 12.0;

fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn page_title() -> String {
    format!("{} | {}", SUITE, BRAND)
}

/// Sets `<meta name=..>` content, creating the tag when the page has none.
pub fn set_meta(name: &str, content: &str) -> Result<(), JsValue> {
    let document = document()?;
    let tag = match document.query_selector(&format!("meta[name=\"{}\"]", name))? {
        Some(tag) => tag,
        None => {
            let tag = document.create_element("meta")?;
            tag.set_attribute("name", name)?;
            document
                .head()
                .ok_or_else(|| JsValue::from_str("no <head>"))?
                .append_child(&tag)?;
            tag
        }
    };
    tag.set_attribute("content", content)
}

pub fn apply_metadata(language: Language) -> Result<(), JsValue> {
    let document = document()?;
    document.set_title(&page_title());
    if let Some(root) = document.document_element() {
        root.set_attribute("lang", language.code())?;
    }
    set_meta("description", language.content().meta_description)
}

/// Returns the fragment selector of an in-page link such as `#pricing`.
pub fn in_page_anchor(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

pub fn scroll_target_top(element_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    (element_top + scroll_y - (header_height + HEADER_GAP)).max(0.0)
}

/// Smooth-scrolls to `selector`, leaving room for the fixed header.
/// Returns false when the selector matches nothing.
pub fn scroll_to_anchor(selector: &str, header: Option<&HtmlElement>) -> Result<bool, JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let Some(target) = document()?.query_selector(selector)? else {
        return Ok(false);
    };
    let header_height = header.map(|h| h.offset_height() as f64).unwrap_or(0.0);
    let top = scroll_target_top(target.get_bounding_client_rect().top(), window.scroll_y()?, header_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

/// The `<a>` an event started in, if any.
pub fn enclosing_link(target: Option<web_sys::EventTarget>) -> Option<Element> {
    target?.dyn_into::<Element>().ok()?.closest("a").ok()?
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragment_links_are_intercepted() {
        assert_eq!(in_page_anchor("#pricing"), Some("#pricing"));
        assert_eq!(in_page_anchor("#"), None);
        assert_eq!(in_page_anchor("/privacy"), None);
        assert_eq!(in_page_anchor("https://sl360.rbgroupsolutions.com"), None);
    }

    #[test]
    fn scroll_offset_leaves_room_for_header() {
        assert_eq!(scroll_target_top(500.0, 1000.0, 68.0), 1420.0);
        assert_eq!(scroll_target_top(10.0, 0.0, 68.0), 0.0);
    }

    #[test]
    fn title_names_suite_and_company() {
        assert_eq!(page_title(), "RB Field Pro 360 | RB Group Solutions LLC");
    }
}
