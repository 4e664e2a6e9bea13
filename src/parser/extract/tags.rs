//! Keyword taggers for stage, sector and geography.
//!
//! Each scans lower-cased text for literal substrings. Matching is naive on
//! purpose (no word boundaries), so "us" hits inside longer words too.

const STAGE_KEYWORDS: &[(&[&str], &str)] = &[
    (&["pre-seed", "preseed"], "Pre-Seed"),
    (&["seed"], "Seed"),
    (&["series a"], "Series A"),
    (&["series b"], "Series B"),
    (&["series c", "growth"], "Series C+"),
];

const SECTOR_KEYWORDS: &[(&str, &str)] = &[
    ("fintech", "Fintech"),
    ("healthcare", "Healthcare"),
    ("enterprise", "Enterprise Software"),
    ("consumer", "Consumer"),
    ("automotive", "Automotive"),
    ("fashion", "Fashion"),
    ("ecommerce", "E-commerce"),
    ("cyber", "Cybersecurity"),
    ("ai", "AI/ML"),
    ("biotech", "Biotech"),
    ("climate", "Climate Tech"),
    ("edtech", "EdTech"),
    ("proptech", "PropTech"),
    ("gaming", "Gaming"),
    ("marketplace", "Marketplace"),
    ("infrastructure", "Infrastructure"),
];

const REGION_KEYWORDS: &[(&[&str], &str)] = &[
    (&["global"], "Global"),
    (&["north america", "usa", "us"], "North America"),
    (&["europe"], "Europe"),
    (&["asia"], "Asia"),
    (&["latin america"], "Latin America"),
];

pub const DEFAULT_STAGES: &[&str] = &["Seed", "Series A"];
pub const DEFAULT_SECTORS: &[&str] = &["Enterprise Software", "Consumer"];
pub const DEFAULT_REGIONS: &[&str] = &["North America"];

pub fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn scan(text: &str, table: &[(&[&str], &str)]) -> Vec<String> {
    let lower = text.to_lowercase();
    table
        .iter()
        .filter(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, label)| label.to_string())
        .collect()
}

pub fn investment_stages(text: &str) -> Vec<String> {
    let stages = scan(text, STAGE_KEYWORDS);
    if stages.is_empty() {
        owned(DEFAULT_STAGES)
    } else {
        stages
    }
}

/// Sector labels from text; with no hits, fall back on the firm name.
pub fn sectors(text: &str, firm: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let found: Vec<String> = SECTOR_KEYWORDS
        .iter()
        .filter(|(kw, _)| lower.contains(kw))
        .map(|(_, label)| label.to_string())
        .collect();
    if !found.is_empty() {
        return found;
    }

    let firm = firm.to_lowercase();
    if firm.contains("fintech") {
        owned(&["Fintech"])
    } else if firm.contains("health") {
        owned(&["Healthcare"])
    } else {
        owned(DEFAULT_SECTORS)
    }
}

pub fn geographic_focus(text: &str) -> Vec<String> {
    let regions = scan(text, REGION_KEYWORDS);
    if regions.is_empty() {
        owned(DEFAULT_REGIONS)
    } else {
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_in_table_order() {
        assert_eq!(
            investment_stages("We lead Series A and Pre-Seed rounds"),
            vec!["Pre-Seed", "Seed", "Series A"]
        );
    }

    #[test]
    fn growth_maps_to_series_c() {
        assert_eq!(investment_stages("Growth equity"), vec!["Series C+"]);
    }

    #[test]
    fn stages_default() {
        assert_eq!(investment_stages("No stage words here"), vec!["Seed", "Series A"]);
    }

    #[test]
    fn sectors_from_text() {
        assert_eq!(
            sectors("Backs FINTECH and climate founders", "Acme"),
            vec!["Fintech", "Climate Tech"]
        );
    }

    #[test]
    fn sectors_from_firm_name() {
        assert_eq!(sectors("nothing relevant", "Fintech Collective"), vec!["Fintech"]);
        assert_eq!(sectors("nothing relevant", "Health Velocity"), vec!["Healthcare"]);
    }

    #[test]
    fn sectors_default_pair() {
        assert_eq!(sectors("zzz", "Foundry"), vec!["Enterprise Software", "Consumer"]);
    }

    #[test]
    fn ai_substring_is_loose() {
        // "ai" inside "Spain" still counts
        assert!(sectors("Based in Spain", "Foundry").contains(&"AI/ML".to_string()));
    }

    #[test]
    fn regions() {
        assert_eq!(geographic_focus("Europe and Asia"), vec!["Europe", "Asia"]);
        assert_eq!(geographic_focus("Invests in the USA"), vec!["North America"]);
        assert_eq!(geographic_focus("Latin America"), vec!["Latin America"]);
        // "us" inside "focus"
        assert_eq!(
            geographic_focus("Latin America focus"),
            vec!["North America", "Latin America"]
        );
    }

    #[test]
    fn regions_default() {
        assert_eq!(geographic_focus("Remote"), vec!["North America"]);
    }
}
