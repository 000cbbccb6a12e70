/// Directory the card art is served from.
pub const CARD_IMAGE_DIR: &str = "/static/images/cards/";

/// Maps a card name to its static image path.
///
/// Lowercases, turns spaces into underscores and strips the quote and
/// bracket characters card names can carry, so `"P.E.K.K.A"` and
/// `"Prince's Guard"` both land on real asset file names. The transform is
/// idempotent: feeding it an already slugged name changes nothing.
pub fn card_image_path(card_name: &str) -> String {
    let slug: String = card_name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| !matches!(c, '\'' | '[' | ']'))
        .collect();
    format!("{CARD_IMAGE_DIR}{slug}.webp")
}

/// Image paths for a whole deck, keeping card order.
pub fn deck_image_paths(card_names: &[String]) -> Vec<String> {
    card_names.iter().map(|name| card_image_path(name)).collect()
}

/// One `<span><img></span>` per image path, concatenated for an img-row.
pub fn image_row_html(img_paths: &[String]) -> String {
    img_paths
        .iter()
        .map(|path| format!(r#"<span><img src="{path}" alt="Karte" class="card-width"></span>"#))
        .collect::<Vec<String>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_image_path_lowercase_and_underscores() {
        assert_eq!(
            card_image_path("Mega Minion"),
            "/static/images/cards/mega_minion.webp"
        );
    }

    #[test]
    fn test_card_image_path_strips_quote_and_brackets() {
        // Exactly space, ', [ and ] are affected
        assert_eq!(
            card_image_path("Prince's [Royal] Guard"),
            "/static/images/cards/princes_royal_guard.webp"
        );
        // Dots and dashes pass through untouched
        assert_eq!(card_image_path("P.E.K.K.A"), "/static/images/cards/p.e.k.k.a.webp");
    }

    #[test]
    fn test_card_image_path_idempotent_on_slugged_input() {
        let path = card_image_path("mega_minion");
        assert_eq!(path, "/static/images/cards/mega_minion.webp");
    }

    #[test]
    fn test_image_row_html() {
        let paths = vec![
            "/static/images/cards/knight.webp".to_string(),
            "/static/images/cards/archers.webp".to_string(),
        ];
        let html = image_row_html(&paths);
        // One span-wrapped img per card, no separator between them
        assert_eq!(html.matches("<span>").count(), 2);
        assert!(html.contains(r#"src="/static/images/cards/knight.webp""#));
        assert!(html.contains(r#"alt="Karte" class="card-width""#));
    }
}
