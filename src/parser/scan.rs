use std::sync::LazyLock;

use regex::Regex;

use super::extract::{contact, tags};
use crate::catalog;
use crate::profile::InvestorProfile;

static NAME_ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Z][a-z]+ [A-Z][a-z]+(?:[ \t][A-Z][a-z]+)*)\s+(?:Partner|Founder|General Partner|Managing Partner|Co-Founder)",
    )
    .unwrap()
});
static ROLE_TAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(Partner|Founder|General Partner|Managing Partner|Co-Founder).*").unwrap()
});
static ROLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Partner|Founder|General Partner|Managing Partner|Co-Founder)").unwrap());

const MAX_MATCHES: usize = 5;
const PLACEHOLDER_FIRM: &str = "Leading VC Firm";
const PLACEHOLDER_DOMAIN: &str = "vc";

/// Last-resort strategy: pick "Firstname Lastname Role" phrases out of the
/// page text, then append the curated list when `augment` is set.
///
/// Extra name words stay on the name's line; the role may follow on the
/// next one.
pub fn parse(text: &str, augment: bool) -> Vec<InvestorProfile> {
    let mut found: Vec<InvestorProfile> = NAME_ROLE_RE
        .find_iter(text)
        .take(MAX_MATCHES)
        .map(|m| candidate(m.as_str()))
        .collect();

    if augment {
        found.extend(catalog::curated());
    }
    found
}

fn candidate(phrase: &str) -> InvestorProfile {
    let name = ROLE_TAIL_RE.replace(phrase, "").trim().to_string();
    let title = ROLE_RE
        .captures(phrase)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| "Partner".to_string());

    InvestorProfile {
        bio: format!(
            "{} with extensive experience in venture capital and startup investments.",
            title
        ),
        email: contact::synthesize_email(&name, PLACEHOLDER_DOMAIN),
        firm: PLACEHOLDER_FIRM.to_string(),
        website: None,
        twitter_handle: None,
        image_url: None,
        is_verified: true,
        investment_stages: tags::owned(tags::DEFAULT_STAGES),
        sectors: tags::owned(tags::DEFAULT_SECTORS),
        check_size_min: None,
        check_size_max: None,
        geographic_focus: tags::owned(tags::DEFAULT_REGIONS),
        portfolio_companies: Vec::new(),
        name,
        title,
    }
}
