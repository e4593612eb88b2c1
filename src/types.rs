use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Demand
// ---------------------------------------------------------------------------

/// One discovered micro-SaaS opportunity. Fixture data: built once at startup
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub id: String,
    pub title: String,
    pub description: String,
    pub problem: String,
    pub user_profile: UserProfile,
    pub scenario: String,
    pub pain_points: Vec<String>,
    pub existing_solutions: Vec<String>,
    pub pricing_signals: Vec<String>,
    pub market_size: MarketSize,
    pub technical_feasibility: TechnicalFeasibility,
    pub scores: Scores,
    pub recommended_pricing: String,
    pub mvp_features: Vec<String>,
    pub source: String,
    pub discovered_at: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub role: String,
    pub company_size: String,
    pub tech_level: String,
    pub budget: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSize {
    /// Monthly search volume.
    pub search_volume: u32,
    pub competitor_users: u32,
    /// Year-over-year growth, percent.
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalFeasibility {
    pub complexity: Complexity,
    pub dev_time: String,
    pub main_tech: Vec<String>,
}

/// All six scores are authored per record on a 0–10 scale. `overall` is not
/// derived from the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub demand_strength: f64,
    pub market_size: f64,
    pub willingness_to_pay: f64,
    pub technical_feasibility: f64,
    pub passive_income_fit: f64,
    pub overall: f64,
}

/// Implementation-complexity bucket. Values outside the three known buckets
/// deserialize to `Unknown` and render with the neutral badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
            Complexity::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Secondary fixture shapes — flat {label, value} lists for the charts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub demand_count: u32,
    pub high_potential: u32,
}

/// Share of discovered demands per source, already expressed as a percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceShare {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBucket {
    pub range: String,
    pub count: u32,
}

// ---------------------------------------------------------------------------
// Sidebar fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickFilter {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolType {
    pub name: String,
    pub count: u32,
}
