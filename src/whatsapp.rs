//! WhatsApp Deep Links
//!
//! Renders per-place messages from a list template and builds the
//! `wa.me` links that open a prefilled conversation in a new tab.

use crate::api::types::Place;

/// Substitute template placeholders with a place's details
///
/// Supported placeholders: `{name}`, `{phone_number}` and
/// `{facebook_url}`. Anything else passes through untouched.
pub fn render_template(template: &str, place: &Place) -> String {
    template
        .replace("{name}", &place.name)
        .replace("{phone_number}", &place.phone)
        .replace("{facebook_url}", place.facebook_url.as_deref().unwrap_or(""))
}

/// Message to open a chat with, preferring the server-rendered one
pub fn message_for(place: &Place, template: &str) -> String {
    match &place.formatted_message {
        Some(message) if !message.is_empty() => message.clone(),
        _ => render_template(template, place),
    }
}

/// Build a `wa.me` link that opens a chat with the message prefilled
///
/// The phone is reduced to digits; `wa.me` rejects `+` and separators.
pub fn wa_me_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PlaceStatus;

    fn place() -> Place {
        Place {
            id: 7,
            name: "Cafe Nile".to_string(),
            phone: "+20101234567".to_string(),
            facebook_url: Some("https://fb.com/cafenile".to_string()),
            status: PlaceStatus::NotConnected,
            formatted_message: None,
        }
    }

    #[test]
    fn test_render_template_substitutes_all_placeholders() {
        let rendered = render_template(
            "Hi {name}, we found {phone_number} via {facebook_url}. Welcome {name}!",
            &place(),
        );

        assert_eq!(
            rendered,
            "Hi Cafe Nile, we found +20101234567 via https://fb.com/cafenile. Welcome Cafe Nile!"
        );
    }

    #[test]
    fn test_render_template_leaves_unknown_placeholders() {
        assert_eq!(
            render_template("Hi {name}, code {promo_code}", &place()),
            "Hi Cafe Nile, code {promo_code}"
        );
    }

    #[test]
    fn test_render_template_handles_missing_facebook_url() {
        let mut p = place();
        p.facebook_url = None;

        assert_eq!(render_template("link: {facebook_url}", &p), "link: ");
    }

    #[test]
    fn test_message_for_prefers_server_rendered() {
        let mut p = place();
        p.formatted_message = Some("already rendered".to_string());

        assert_eq!(message_for(&p, "Hi {name}"), "already rendered");
    }

    #[test]
    fn test_message_for_falls_back_to_template() {
        let mut p = place();
        p.formatted_message = Some(String::new());

        assert_eq!(message_for(&p, "Hi {name}"), "Hi Cafe Nile");
    }

    #[test]
    fn test_wa_me_url_strips_phone_to_digits() {
        let url = wa_me_url("+20101234567", "hi");

        assert_eq!(url, "https://wa.me/20101234567?text=hi");
    }

    #[test]
    fn test_wa_me_url_encodes_message() {
        let url = wa_me_url("+20101234567", "Hello Cafe Nile & Co\nsecond line");

        assert_eq!(
            url,
            "https://wa.me/20101234567?text=Hello%20Cafe%20Nile%20%26%20Co%0Asecond%20line"
        );
    }
}
