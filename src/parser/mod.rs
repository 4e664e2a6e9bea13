pub mod assemble;
pub mod cards;
pub mod extract;
pub mod patterns;
pub mod scan;

use std::fmt;

use scraper::Html;
use tracing::info;

use crate::profile::InvestorProfile;

/// Parsing strategies, in the order the cascade tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Cards,
    Patterns,
    Scan,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Cards => "cards",
            Strategy::Patterns => "patterns",
            Strategy::Scan => "scan",
        })
    }
}

#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub strategy: Strategy,
    pub profiles: Vec<InvestorProfile>,
}

/// Cascade: cards → three-line patterns → name/role scan.
///
/// The first strategy with at least one admitted profile wins and the rest
/// never run. With `augment` set the scan always yields the curated list, so
/// the outcome is never empty.
pub fn parse_document(html: &str, augment: bool) -> ParseOutcome {
    let document = Html::parse_document(html);

    let profiles = assemble::admit(cards::parse(&document));
    if !profiles.is_empty() {
        return finish(Strategy::Cards, profiles);
    }

    info!("No investor cards found, trying text patterns");
    let text = document_text(&document);
    let profiles = assemble::admit(patterns::parse(&text));
    if !profiles.is_empty() {
        return finish(Strategy::Patterns, profiles);
    }

    info!("No text patterns found, scanning for names");
    finish(Strategy::Scan, assemble::admit(scan::parse(&text, augment)))
}

fn finish(strategy: Strategy, profiles: Vec<InvestorProfile>) -> ParseOutcome {
    info!("Strategy '{}' produced {} profiles", strategy, profiles.len());
    ParseOutcome { strategy, profiles }
}

fn document_text(document: &Html) -> String {
    document.root_element().text().collect()
}

// ── Tests ──
