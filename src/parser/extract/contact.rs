use std::sync::LazyLock;

use scraper::Selector;

use super::Card;

static WEBSITE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(r#"a[href*="http"]"#).unwrap());
static TWITTER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href*="twitter.com"], a[href*="x.com"]"#).unwrap());
static IMAGE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

const MAX_DOMAIN_LEN: usize = 15;

/// Build `first.last@firmdomain.com` from a name and firm.
///
/// Deterministic and offline: nothing checks the mailbox exists.
pub fn synthesize_email(name: &str, firm: &str) -> String {
    let first = name.split(' ').next().unwrap_or("").to_lowercase();
    let last = name.split(' ').next_back().unwrap_or("").to_lowercase();
    let domain: String = firm
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(MAX_DOMAIN_LEN)
        .collect();
    format!("{}.{}@{}.com", first, last, domain)
}

/// First link pointing at an absolute http(s) target.
pub fn website(card: &Card<'_>) -> Option<String> {
    card.first_attr(&WEBSITE_SEL, "href")
}

/// First link to twitter.com or x.com.
pub fn twitter(card: &Card<'_>) -> Option<String> {
    card.first_attr(&TWITTER_SEL, "href")
}

/// Source of the first image, kept only when it is an absolute http(s) URL.
pub fn image(card: &Card<'_>) -> Option<String> {
    card.first_attr(&IMAGE_SEL, "src").filter(|src| src.starts_with("http"))
}
