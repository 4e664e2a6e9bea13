pub mod contact;
pub mod money;
pub mod portfolio;
pub mod tags;
pub mod title;

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
#[cfg(test)]
use scraper::Html;

use crate::profile::InvestorProfile;

static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"h3, .name, [data-testid="investor-name"]"#).unwrap());
static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"p, .title, [data-testid="investor-title"]"#).unwrap());
static BIO_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".bio, .description, p").unwrap());
static VERIFIED_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#".verified, [data-verified="true"]"#).unwrap());

/// One investor card and its flattened text.
///
/// Selectors only ever match the card's descendants, never the card itself.
pub struct Card<'a> {
    element: ElementRef<'a>,
    text: String,
}

impl<'a> Card<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        let text = element.text().collect();
        Card { element, text }
    }

    /// All text nodes concatenated in document order.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.element
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    pub fn last_text(&self, selector: &Selector) -> Option<String> {
        self.element
            .select(selector)
            .last()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    pub fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.element
            .select(selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.element.select(selector).next().is_some()
    }
}

#[cfg(test)]
impl<'a> Card<'a> {
    /// The first top-level element of a parsed fragment.
    pub(crate) fn first_in(html: &'a Html) -> Self {
        let element = html
            .root_element()
            .children()
            .find_map(ElementRef::wrap)
            .expect("fragment has an element");
        Card::new(element)
    }
}

/// Run every field extractor over one investor card.
///
/// Always returns a profile; identity fields may be empty, which the
/// assembler rejects.
pub fn profile_from_card(card: &Card<'_>) -> InvestorProfile {
    let name = card.first_text(&NAME_SEL).unwrap_or_default();
    let title_line = card.first_text(&TITLE_SEL).unwrap_or_default();
    let bio = card.last_text(&BIO_SEL).unwrap_or_default();
    let (title, firm) = title::split_title_firm(&title_line);

    let text = card.text();
    let check = money::check_size(text);

    InvestorProfile {
        bio: if bio.is_empty() {
            format!(
                "{} at {}. Specialized venture capitalist with expertise in various investment stages and sectors.",
                title, firm
            )
        } else {
            bio
        },
        email: contact::synthesize_email(&name, &firm),
        website: contact::website(card),
        twitter_handle: contact::twitter(card),
        image_url: contact::image(card),
        is_verified: card.contains(&VERIFIED_SEL),
        investment_stages: tags::investment_stages(text),
        sectors: tags::sectors(text, &firm),
        check_size_min: Some(check.min),
        check_size_max: Some(check.max),
        geographic_focus: tags::geographic_focus(text),
        portfolio_companies: portfolio::portfolio_companies(text),
        name,
        title,
        firm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = r#"<div class="investor-card">
  <img src="https://cdn.example.com/jane.jpg">
  <h3>Jane Smith</h3>
  <p class="title">Partner @ Acme Ventures</p>
  <a href="https://acme.vc">Website</a>
  <a href="https://twitter.com/janesmith">Twitter</a>
  <span class="verified">Verified</span>
  <p class="bio">Leads pre-seed fintech rounds in Europe. Checks $100K - $500K. Portfolio: Ledgerly, Finch &amp; Owl, Tally.</p>
</div>"#;

    #[test]
    fn full_card() {
        let html = Html::parse_fragment(CARD);
        let p = profile_from_card(&Card::first_in(&html));
        assert_eq!(p.name, "Jane Smith");
        assert_eq!(p.title, "Partner");
        assert_eq!(p.firm, "Acme Ventures");
        assert_eq!(p.email, "jane.smith@acmeventures.com");
        assert_eq!(p.website.as_deref(), Some("https://acme.vc"));
        assert_eq!(p.twitter_handle.as_deref(), Some("https://twitter.com/janesmith"));
        assert_eq!(p.image_url.as_deref(), Some("https://cdn.example.com/jane.jpg"));
        assert!(p.is_verified);
        assert!(p.bio.starts_with("Leads pre-seed"));
        assert_eq!(p.investment_stages, vec!["Pre-Seed", "Seed"]);
        assert!(p.sectors.contains(&"Fintech".to_string()));
        assert!(p.geographic_focus.contains(&"Europe".to_string()));
        assert_eq!(p.check_size_min.as_deref(), Some("$100K"));
        assert_eq!(p.check_size_max.as_deref(), Some("$500K"));
        assert_eq!(p.portfolio_companies, vec!["Ledgerly", "Finch", "Owl", "Tally"]);
    }

    #[test]
    fn sparse_card_gets_defaults() {
        let html = Html::parse_fragment(
            r#"<div class="vc-profile"><span class="name">Omar Haddad</span><span class="title">Foundry Group</span></div>"#,
        );
        let p = profile_from_card(&Card::first_in(&html));
        assert_eq!(p.name, "Omar Haddad");
        assert_eq!(p.title, "Partner");
        assert_eq!(p.firm, "Foundry Group");
        assert!(p.bio.starts_with("Partner at Foundry Group."));
        assert!(!p.is_verified);
        assert_eq!(p.investment_stages, vec!["Seed", "Series A"]);
        assert_eq!(p.check_size_min.as_deref(), Some("$100K"));
        assert_eq!(p.check_size_max.as_deref(), Some("$5M"));
        assert!(p.portfolio_companies.is_empty());
        assert_eq!(p.website, None);
    }

    #[test]
    fn missing_name_leaves_identity_empty() {
        let html = Html::parse_fragment(r#"<div class="investor-card"><p>Partner @ Acme</p></div>"#);
        let p = profile_from_card(&Card::first_in(&html));
        assert!(p.name.is_empty());
        assert!(!p.has_identity());
    }

    #[test]
    fn data_verified_attribute() {
        let html = Html::parse_fragment(r#"<div><span data-verified="true"></span><h3>A B</h3></div>"#);
        assert!(Card::first_in(&html).contains(&VERIFIED_SEL));
    }

    #[test]
    fn card_root_is_not_its_own_field() {
        let html = Html::parse_fragment(
            r#"<p class="vc-profile" data-verified="true"><span class="name">Lena Park</span> <span>GP @ Bright Capital</span></p>"#,
        );
        let card = Card::first_in(&html);
        assert!(!card.contains(&VERIFIED_SEL));

        let p = profile_from_card(&card);
        assert!(!p.is_verified);
        assert_eq!(p.name, "Lena Park");
        // no <p> below the root, so title and bio fall back
        assert_eq!((p.title.as_str(), p.firm.as_str()), ("Partner", "Venture Capital Firm"));
        assert!(p.bio.starts_with("Partner at Venture Capital Firm."));
    }
}
