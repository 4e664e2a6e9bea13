use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use super::extract::{profile_from_card, Card};
use crate::profile::InvestorProfile;

static CARD_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"[data-testid="investor-card"], .investor-card, .vc-profile"#).unwrap()
});

/// Extract one candidate per investor card in the document.
///
/// Extraction is total: every matched card yields a candidate, and
/// incomplete ones are left for the assembler to reject.
pub fn parse(document: &Html) -> Vec<InvestorProfile> {
    let candidates: Vec<InvestorProfile> = document
        .select(&CARD_SEL)
        .map(|card| profile_from_card(&Card::new(card)))
        .collect();
    debug!("Card strategy produced {} candidates", candidates.len());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_all_marker_styles() {
        let doc = Html::parse_document(
            r#"<body>
            <div data-testid="investor-card"><h3>Ann Lee</h3><p>Partner @ Floodgate</p></div>
            <div class="investor-card"><h3>Bo Chen</h3><p>Principal at Foundry</p></div>
            <article class="vc-profile"><h3>Cy Diaz</h3><p>GP @ Homebrew</p></article>
            <div class="other"><h3>Not Counted</h3></div>
            </body>"#,
        );
        let got = parse(&doc);
        let names: Vec<&str> = got.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ann Lee", "Bo Chen", "Cy Diaz"]);
        assert_eq!(got[1].firm, "Foundry");
    }

    #[test]
    fn card_with_inline_image_is_kept() {
        let avatar = format!("data:image/png;base64,{}", "A".repeat(70 * 1024));
        let html = format!(
            r#"<body><div class="investor-card"><img src="{}"><h3>Jane Smith</h3><p>Partner @ Acme Ventures</p></div>
            <div class="vc-profile"><h3>Small Card</h3><p>Partner @ Acme</p></div></body>"#,
            avatar
        );
        let got = parse(&Html::parse_document(&html));
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].name, "Jane Smith");
        assert_eq!(got[0].firm, "Acme Ventures");
        assert_eq!(got[0].image_url, None);
        assert_eq!(got[1].name, "Small Card");
    }

    #[test]
    fn no_cards() {
        let doc = Html::parse_document("<body><p>Nothing structured</p></body>");
        assert!(parse(&doc).is_empty());
    }

    #[test]
    fn fixture_cards() {
        let html = std::fs::read_to_string("tests/fixtures/cards.html").unwrap();
        let got = parse(&Html::parse_document(&html));
        // the nameless fourth card is still a candidate here
        assert_eq!(got.len(), 4);
        assert_eq!(got[0].email, "jane.smith@acmeventures.com");
        assert!(got[3].name.is_empty());
    }
}
