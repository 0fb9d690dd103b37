//! Industry keyword sets.
//!
//! Reserved for keyword-gap analysis; scoring does not read these yet.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Industries with a curated keyword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Industry {
    /// Software and IT.
    Technology,
    /// Marketing and communications.
    Marketing,
    /// Banking, accounting, investment.
    Finance,
    /// Clinical and health services.
    Healthcare,
    /// Sales and business development.
    Sales,
}

impl Industry {
    /// Every industry, in listing order.
    pub const ALL: [Self; 5] = [
        Self::Technology,
        Self::Marketing,
        Self::Finance,
        Self::Healthcare,
        Self::Sales,
    ];

    /// Returns the industry as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Marketing => "marketing",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Sales => "sales",
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords recruiters and ATS filters commonly look for in an industry.
pub const fn industry_keywords(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Technology => &[
            "agile",
            "api",
            "cloud",
            "ci/cd",
            "microservices",
            "scalability",
            "devops",
            "kubernetes",
            "machine learning",
            "data pipeline",
            "security",
            "testing",
        ],
        Industry::Marketing => &[
            "seo",
            "content strategy",
            "brand awareness",
            "campaign",
            "roi",
            "conversion rate",
            "social media",
            "analytics",
            "lead generation",
            "market research",
        ],
        Industry::Finance => &[
            "financial modeling",
            "forecasting",
            "budgeting",
            "risk management",
            "compliance",
            "gaap",
            "audit",
            "portfolio",
            "valuation",
            "reconciliation",
        ],
        Industry::Healthcare => &[
            "patient care",
            "hipaa",
            "clinical",
            "ehr",
            "compliance",
            "quality improvement",
            "care coordination",
            "patient outcomes",
            "triage",
        ],
        Industry::Sales => &[
            "quota",
            "pipeline",
            "crm",
            "b2b",
            "account management",
            "negotiation",
            "prospecting",
            "revenue growth",
            "client retention",
            "closing",
        ],
    }
}
