use super::Intent;

/// Phrases and keywords that vote for one intent.
///
/// A contained phrase adds `weight * 2`, a contained keyword adds `weight`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PatternRule {
    pub(crate) intent: Intent,
    pub(crate) phrases: &'static [&'static str],
    pub(crate) keywords: &'static [&'static str],
    pub(crate) weight: u32,
}

/// An immutable rule table handed to the classifier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntentRules<'a> {
    rules: &'a [PatternRule],
}

impl<'a> IntentRules<'a> {
    pub(crate) const fn new(rules: &'a [PatternRule]) -> Self {
        Self { rules }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &'a PatternRule> {
        self.rules.iter()
    }
}

impl Default for IntentRules<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

const DEFAULT_RULES: &[PatternRule] = &[
    PatternRule {
        intent: Intent::PerformanceTop,
        phrases: &[
            "top agents",
            "best performers",
            "highest collection",
            "star performers",
            "leading agents",
            "best agents",
            "top performers",
            "highest conversion",
        ],
        keywords: &[
            "top",
            "best",
            "highest",
            "leading",
            "star",
            "excellent",
            "outstanding",
        ],
        weight: 2,
    },
    PatternRule {
        intent: Intent::PerformanceLow,
        phrases: &[
            "lowest performing",
            "worst performing",
            "underperforming",
            "poor performance",
            "low collection",
            "bottom performers",
            "weakest agents",
        ],
        keywords: &[
            "lowest",
            "worst",
            "poor",
            "underperforming",
            "weak",
            "bottom",
            "struggling",
        ],
        weight: 2,
    },
    PatternRule {
        intent: Intent::Regional,
        phrases: &[
            "by region",
            "by state",
            "state wise",
            "regional performance",
            "state performance",
            "geographic",
            "location wise",
            "area wise",
        ],
        keywords: &[
            "region",
            "state",
            "geography",
            "location",
            "area",
            "north",
            "south",
            "east",
            "west",
            "ut",
        ],
        weight: 2,
    },
    PatternRule {
        intent: Intent::Conversion,
        phrases: &[
            "conversion rate",
            "success rate",
            "conversion performance",
            "conversion by",
        ],
        keywords: &["conversion", "rate", "success"],
        weight: 2,
    },
    PatternRule {
        intent: Intent::BucketAnalysis,
        phrases: &[
            "by bucket",
            "by band",
            "bucket wise",
            "band wise",
            "pos band",
            "dpd bucket",
            "bucket performance",
        ],
        keywords: &["bucket", "band", "pos", "dpd", "segment"],
        weight: 2,
    },
    PatternRule {
        intent: Intent::AgentAnalysis,
        phrases: &[
            "agent performance",
            "agent wise",
            "by agent",
            "collector performance",
            "team performance",
        ],
        keywords: &["agent", "collector", "team", "individual"],
        weight: 2,
    },
    PatternRule {
        intent: Intent::TrendAnalysis,
        phrases: &[
            "over time",
            "trend analysis",
            "historical data",
            "time series",
            "monthly trend",
            "daily trend",
        ],
        keywords: &[
            "trend",
            "timeline",
            "history",
            "historical",
            "over",
            "monthly",
            "daily",
            "weekly",
        ],
        weight: 2,
    },
    PatternRule {
        intent: Intent::Comparison,
        phrases: &[
            "compare",
            "comparison between",
            "versus",
            "vs",
            "difference between",
        ],
        keywords: &[
            "compare",
            "comparison",
            "versus",
            "vs",
            "difference",
            "against",
        ],
        weight: 2,
    },
    PatternRule {
        intent: Intent::Aggregate,
        phrases: &[
            "total collection",
            "total aum",
            "overall performance",
            "sum of",
            "average",
        ],
        keywords: &["total", "sum", "average", "overall", "aggregate", "combined"],
        weight: 1,
    },
    PatternRule {
        intent: Intent::Search,
        phrases: &["find", "show me", "get", "list", "display"],
        keywords: &["find", "show", "get", "list", "display", "search"],
        weight: 1,
    },
];
