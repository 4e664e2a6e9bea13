use serde::{Deserialize, Serialize};

pub const MAX_PORTFOLIO: usize = 5;

pub const INDUSTRIES: &[&str] = &[
    "Fintech",
    "Healthcare",
    "Enterprise Software",
    "Consumer",
    "Automotive",
    "Fashion",
    "E-commerce",
    "Cybersecurity",
    "AI/ML",
    "Biotech",
    "Climate Tech",
    "EdTech",
    "PropTech",
    "Gaming",
    "Marketplace",
    "Infrastructure",
    "Data Services",
    "DevTools",
    "Hardware",
    "Robotics",
];

pub const INVESTMENT_STAGES: &[&str] = &[
    "Pre-Seed",
    "Seed",
    "Series A",
    "Series B",
    "Series C+",
    "Growth",
    "Late Stage",
];

pub const CHECK_SIZES: &[&str] = &[
    "Under $100K",
    "$100K - $500K",
    "$500K - $1M",
    "$1M - $5M",
    "$5M - $10M",
    "$10M+",
];

pub const GEOGRAPHIC_REGIONS: &[&str] = &[
    "North America",
    "Europe",
    "Asia",
    "Global",
    "Latin America",
    "Middle East",
    "Africa",
    "Australia",
];

/// One investor's structured record, as produced by a harvest pass.
///
/// Carries no identifier: ids are assigned by the storage layer on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile {
    pub name: String,
    pub title: String,
    pub firm: String,
    pub bio: String,
    pub email: String,
    pub website: Option<String>,
    pub twitter_handle: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    pub investment_stages: Vec<String>,
    pub sectors: Vec<String>,
    pub check_size_min: Option<String>,
    pub check_size_max: Option<String>,
    pub geographic_focus: Vec<String>,
    #[serde(default)]
    pub portfolio_companies: Vec<String>,
}

impl InvestorProfile {
    /// Identity fields are all present.
    pub fn has_identity(&self) -> bool {
        !self.name.trim().is_empty() && !self.title.trim().is_empty() && !self.firm.trim().is_empty()
    }
}

/// A profile admitted into storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub id: i64,
    #[serde(flatten)]
    pub profile: InvestorProfile,
}

/// What the contact-reveal flow hands out.
#[derive(Debug, Clone, Serialize)]
pub struct ContactCard {
    pub name: String,
    pub email: String,
    pub firm: String,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub verified: bool,
    pub note: &'static str,
}

impl From<&StoredProfile> for ContactCard {
    fn from(stored: &StoredProfile) -> Self {
        let p = &stored.profile;
        ContactCard {
            name: p.name.clone(),
            email: p.email.clone(),
            firm: p.firm.clone(),
            website: p.website.clone(),
            twitter: p.twitter_handle.clone(),
            verified: p.is_verified,
            note: "Contact details sourced from the public investor listing",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub industry: Option<String>,
    pub stages: Vec<String>,
    pub geographic_focus: Vec<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl SearchQuery {
    pub const DEFAULT_LIMIT: usize = 20;

    /// A zero limit means "unset", like an absent one.
    pub fn limit(&self) -> usize {
        self.limit.filter(|&n| n > 0).unwrap_or(Self::DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub vcs: Vec<StoredProfile>,
    pub total: usize,
}

/// Result of a refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    pub success: bool,
    pub count: usize,
}

impl RefreshOutcome {
    pub fn failed() -> Self {
        RefreshOutcome { success: false, count: 0 }
    }
}
