use tracing::debug;

use crate::profile::{InvestorProfile, MAX_PORTFOLIO};

/// Keep candidates that carry a name, title and firm.
///
/// Rejections are silent apart from a debug line. No deduplication.
pub fn admit(candidates: Vec<InvestorProfile>) -> Vec<InvestorProfile> {
    candidates
        .into_iter()
        .filter_map(|mut candidate| {
            if !candidate.has_identity() {
                debug!(
                    "Dropping incomplete candidate (name={:?}, title={:?}, firm={:?})",
                    candidate.name, candidate.title, candidate.firm
                );
                return None;
            }
            candidate.portfolio_companies.truncate(MAX_PORTFOLIO);
            Some(candidate)
        })
        .collect()
}
