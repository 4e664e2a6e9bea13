use std::sync::LazyLock;

use regex::Regex;

use crate::profile::MAX_PORTFOLIO;

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:portfolio|investments?|companies?):\s*([^.]+)").unwrap());

/// Company names from the first "Portfolio: A, B & C" style list, up to five.
pub fn portfolio_companies(text: &str) -> Vec<String> {
    let Some(caps) = LABEL_RE.captures(text) else {
        return Vec::new();
    };
    caps[1]
        .split([',', '&'])
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .take(MAX_PORTFOLIO)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_ampersand() {
        assert_eq!(
            portfolio_companies("Portfolio: Ledgerly, Finch & Owl, Tally. More text"),
            vec!["Ledgerly", "Finch", "Owl", "Tally"]
        );
    }

    #[test]
    fn label_variants() {
        assert_eq!(portfolio_companies("Notable investments: Stripe"), vec!["Stripe"]);
        assert_eq!(portfolio_companies("COMPANIES: Rippling, Brex"), vec!["Rippling", "Brex"]);
    }

    #[test]
    fn capped_at_five() {
        let got = portfolio_companies("Portfolio: A, B, C, D, E, F, G");
        assert_eq!(got, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn empties_dropped() {
        assert_eq!(portfolio_companies("Portfolio: Lyft,, & ,Patreon"), vec!["Lyft", "Patreon"]);
    }

    #[test]
    fn no_label() {
        assert!(portfolio_companies("Backed Lyft and Patreon.").is_empty());
    }
}
