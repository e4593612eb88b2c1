//! Pure, synchronous derivation from fixture data to a render-ready view.
//! No I/O, no state. Re-running on identical input yields identical output.

use std::cmp::Ordering;

use crate::config::{PRICING_BAR_DENOMINATOR, TOP_DEMANDS_COUNT};
use crate::fixtures;
use crate::types::{Complexity, Demand, PricingBucket, QuickFilter, SourceShare, ToolType, TrendPoint};

// ---------------------------------------------------------------------------
// Presentational mapping
// ---------------------------------------------------------------------------

/// Display label + CSS class pair for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

/// Fixed lookup for the complexity badge. Anything outside the three known
/// buckets gets the neutral style.
pub fn complexity_badge(complexity: Complexity) -> Badge {
    match complexity {
        Complexity::Low => Badge {
            label: "低",
            class: "badge-green",
        },
        Complexity::Medium => Badge {
            label: "中",
            class: "badge-yellow",
        },
        Complexity::High => Badge {
            label: "高",
            class: "badge-red",
        },
        Complexity::Unknown => Badge {
            label: "—",
            class: "badge-gray",
        },
    }
}

/// Tint class for the overall-score chip.
pub fn score_class(overall: f64) -> &'static str {
    if overall >= 8.5 {
        "score-green"
    } else if overall >= 7.5 {
        "score-blue"
    } else if overall >= 6.5 {
        "score-orange"
    } else {
        "score-gray"
    }
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Top `n` demands by `scores.overall`, descending. Sorts a copy; the input
/// slice keeps its order. The sort is stable, so ties keep fixture order.
pub fn top_demands(demands: &[Demand], n: usize) -> Vec<Demand> {
    let mut ranked = demands.to_vec();
    ranked.sort_by(|a, b| {
        b.scores
            .overall
            .partial_cmp(&a.scores.overall)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceBar {
    pub name: String,
    /// Share percent; doubles as the bar width.
    pub width_pct: f64,
}

/// Source-distribution bars: the authored value is already a percentage.
pub fn source_bars(shares: &[SourceShare]) -> Vec<SourceBar> {
    shares
        .iter()
        .map(|s| SourceBar {
            name: s.name.clone(),
            width_pct: s.value,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingBar {
    pub range: String,
    pub count: u32,
    pub width_pct: f64,
}

/// Pricing bars scaled against the pinned denominator, not the bucket sum.
pub fn pricing_bars(buckets: &[PricingBucket]) -> Vec<PricingBar> {
    buckets
        .iter()
        .map(|b| PricingBar {
            range: b.range.clone(),
            count: b.count,
            width_pct: (f64::from(b.count) / PRICING_BAR_DENOMINATOR) * 100.0,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Dashboard assembly
// ---------------------------------------------------------------------------

/// One stat tile on the dashboard header row. Authored values, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub color: &'static str,
}

pub fn stat_tiles() -> Vec<StatTile> {
    vec![
        StatTile {
            title: "总需求数",
            value: "235",
            change: "+12%",
            color: "blue",
        },
        StatTile {
            title: "高潜力机会",
            value: "42",
            change: "+8%",
            color: "green",
        },
        StatTile {
            title: "平均月费潜力",
            value: "$24.50",
            change: "+5%",
            color: "purple",
        },
        StatTile {
            title: "活跃用户画像",
            value: "8,500+",
            change: "+15%",
            color: "orange",
        },
    ]
}

/// A demand plus its presentational lookups, ready to render as a card.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandCard {
    pub demand: Demand,
    pub complexity: Badge,
    pub score_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: Vec<StatTile>,
    pub trends: Vec<TrendPoint>,
    pub sources: Vec<SourceBar>,
    pub pricing: Vec<PricingBar>,
    pub top_demands: Vec<DemandCard>,
    pub quick_filters: Vec<QuickFilter>,
    pub tool_types: Vec<ToolType>,
}

impl DashboardView {
    /// Derive the full dashboard view from the fixture set.
    pub fn build() -> Self {
        let demands = fixtures::mock_demands();
        Self::from_demands(&demands)
    }

    pub fn from_demands(demands: &[Demand]) -> Self {
        let top = top_demands(demands, TOP_DEMANDS_COUNT)
            .into_iter()
            .map(|demand| DemandCard {
                complexity: complexity_badge(demand.technical_feasibility.complexity),
                score_class: score_class(demand.scores.overall),
                demand,
            })
            .collect();

        Self {
            stats: stat_tiles(),
            trends: fixtures::trends_data(),
            sources: source_bars(&fixtures::source_distribution()),
            pricing: pricing_bars(&fixtures::pricing_distribution()),
            top_demands: top,
            quick_filters: fixtures::quick_filters(),
            tool_types: fixtures::tool_types(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_three_by_overall_score() {
        let demands = fixtures::mock_demands();
        let top = top_demands(&demands, 3);
        let ids: Vec<&str> = top.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["TOOL-001", "TOOL-004", "TOOL-002"]);
        assert_eq!(top[0].scores.overall, 8.5);
        assert_eq!(top[1].scores.overall, 8.4);
        assert_eq!(top[2].scores.overall, 8.2);
    }

    #[test]
    fn ties_keep_fixture_order() {
        // TOOL-003 and TOOL-005 are both 7.8; stable sort keeps 003 first.
        let demands = fixtures::mock_demands();
        let ranked = top_demands(&demands, demands.len());
        let ids: Vec<&str> = ranked.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["TOOL-001", "TOOL-004", "TOOL-002", "TOOL-003", "TOOL-005"]);
    }

    #[test]
    fn ranking_does_not_mutate_input() {
        let demands = fixtures::mock_demands();
        let before: Vec<String> = demands.iter().map(|d| d.id.clone()).collect();
        let first = top_demands(&demands, 3);
        let second = top_demands(&demands, 3);
        let after: Vec<String> = demands.iter().map(|d| d.id.clone()).collect();
        assert_eq!(before, after, "source order must survive ranking");
        assert_eq!(first, second, "derivation must be idempotent");
    }

    #[test]
    fn pricing_bar_widths_use_pinned_denominator() {
        let bars = pricing_bars(&fixtures::pricing_distribution());
        assert_eq!(bars[0].count, 22);
        assert!((bars[0].width_pct - 22.0 / 79.0 * 100.0).abs() < 1e-9);
        assert!((bars[0].width_pct - 27.848).abs() < 0.01);
        assert!((bars[3].width_pct - 8.0 / 79.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn source_bar_width_is_the_authored_share() {
        let bars = source_bars(&fixtures::source_distribution());
        assert_eq!(bars[0].name, "Reddit");
        assert_eq!(bars[0].width_pct, 35.0);
    }

    #[test]
    fn complexity_labels() {
        assert_eq!(complexity_badge(Complexity::Low).label, "低");
        assert_eq!(complexity_badge(Complexity::Medium).label, "中");
        assert_eq!(complexity_badge(Complexity::High).label, "高");
    }

    #[test]
    fn unrecognized_complexity_falls_back_to_neutral() {
        let parsed: Complexity = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(parsed, Complexity::Unknown);
        assert_eq!(complexity_badge(parsed).class, "badge-gray");
    }

    #[test]
    fn score_tint_thresholds() {
        assert_eq!(score_class(8.5), "score-green");
        assert_eq!(score_class(8.2), "score-blue");
        assert_eq!(score_class(7.0), "score-orange");
        assert_eq!(score_class(6.0), "score-gray");
    }

    #[test]
    fn dashboard_view_is_deterministic() {
        assert_eq!(DashboardView::build(), DashboardView::build());
    }
}
