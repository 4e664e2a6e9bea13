use std::sync::LazyLock;

use regex::Regex;

use super::extract::{contact, tags};
use crate::profile::InvestorProfile;

static PROFILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]+\s+[A-Z][a-z]+)[\s\n]*([A-Z][^@\n]+)[\s\n]*@[\s\n]*([^.\n]+)").unwrap()
});

const MAX_MATCHES: usize = 10;

/// Scan page text for "Name / Title / @ Firm" laid out over three lines.
///
/// Only identity is recovered; classification fields get the default tags.
pub fn parse(text: &str) -> Vec<InvestorProfile> {
    PROFILE_RE
        .find_iter(text)
        .take(MAX_MATCHES)
        .filter_map(|m| candidate(m.as_str()))
        .collect()
}

fn candidate(block: &str) -> Option<InvestorProfile> {
    let lines: Vec<&str> = block.split('\n').filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 3 {
        return None;
    }

    let name = lines[0].trim().to_string();
    let title = lines[1].trim().to_string();
    let firm = lines[2].replace('@', "").trim().to_string();

    Some(InvestorProfile {
        bio: format!(
            "{} at {}. Experienced venture capitalist focused on strategic investments.",
            title, firm
        ),
        email: contact::synthesize_email(&name, &firm),
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
        firm,
    })
}
