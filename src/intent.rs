mod messages;
mod rules;

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

pub(crate) use self::messages::{
    loading_messages_for, MessageRotation, DEFAULT_ROTATION_INTERVAL_MS,
};
pub(crate) use self::rules::IntentRules;

/// Inputs shorter than this, after trimming, are not classified.
const MIN_QUERY_LEN: usize = 3;

const INTENT_COUNT: usize = 11;

/// The purpose of a question, used to pick what to show while it runs.
///
/// Declaration order matters: when two intents score the same, the one
/// declared first wins.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Intent {
    PerformanceTop,
    PerformanceLow,
    Regional,
    Conversion,
    BucketAnalysis,
    AgentAnalysis,
    TrendAnalysis,
    Comparison,
    Aggregate,
    Search,
    Generic,
}

impl Intent {
    pub(crate) const ALL: [Intent; INTENT_COUNT] = [
        Intent::PerformanceTop,
        Intent::PerformanceLow,
        Intent::Regional,
        Intent::Conversion,
        Intent::BucketAnalysis,
        Intent::AgentAnalysis,
        Intent::TrendAnalysis,
        Intent::Comparison,
        Intent::Aggregate,
        Intent::Search,
        Intent::Generic,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Intent::PerformanceTop => "PERFORMANCE_TOP",
            Intent::PerformanceLow => "PERFORMANCE_LOW",
            Intent::Regional => "REGIONAL",
            Intent::Conversion => "CONVERSION",
            Intent::BucketAnalysis => "BUCKET_ANALYSIS",
            Intent::AgentAnalysis => "AGENT_ANALYSIS",
            Intent::TrendAnalysis => "TREND_ANALYSIS",
            Intent::Comparison => "COMPARISON",
            Intent::Aggregate => "AGGREGATE",
            Intent::Search => "SEARCH",
            Intent::Generic => "GENERIC",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|intent| intent.as_str() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Scores a query against a fixed rule table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntentClassifier<'a> {
    rules: IntentRules<'a>,
}

impl Default for IntentClassifier<'static> {
    fn default() -> Self {
        Self::new(IntentRules::default())
    }
}

impl<'a> IntentClassifier<'a> {
    pub(crate) fn new(rules: IntentRules<'a>) -> Self {
        Self { rules }
    }

    /// Classifies `query`, falling back to [`Intent::Generic`] for absent or
    /// trivially short input and for queries no rule matches.
    pub(crate) fn classify(&self, query: Option<&str>) -> Intent {
        let Some(query) = query else {
            return Intent::Generic;
        };
        let normalized = query.to_lowercase();
        let normalized = normalized.trim();
        if normalized.chars().count() < MIN_QUERY_LEN {
            return Intent::Generic;
        }

        let scores = self.score(normalized);

        let mut best = Intent::Generic;
        let mut max_score = 0;
        for intent in Intent::ALL {
            let score = scores[intent.index()];
            if score > max_score {
                max_score = score;
                best = intent;
            }
        }
        best
    }

    /// Accumulated score per intent, indexed in declaration order.
    fn score(&self, normalized: &str) -> [u32; INTENT_COUNT] {
        let mut scores = [0; INTENT_COUNT];
        for rule in self.rules.iter() {
            let score = &mut scores[rule.intent.index()];
            for phrase in rule.phrases {
                if normalized.contains(phrase) {
                    *score += rule.weight * 2;
                }
            }
            for keyword in rule.keywords {
                if normalized.contains(keyword) {
                    *score += rule.weight;
                }
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::rules::PatternRule;
    use super::*;

    fn classify(query: &str) -> Intent {
        IntentClassifier::default().classify(Some(query))
    }

    #[test]
    fn short_or_absent_input_is_generic() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.classify(None), Intent::Generic);
        assert_eq!(classify(""), Intent::Generic);
        assert_eq!(classify("vs"), Intent::Generic);
        assert_eq!(classify("   ut   "), Intent::Generic);
    }

    #[test]
    fn top_agents() {
        assert_eq!(classify("top agents"), Intent::PerformanceTop);
        assert_eq!(classify("Who are the top agents in March?"), Intent::PerformanceTop);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("Top Agents"), classify("top agents"));
        assert_eq!(classify("  LOWEST PERFORMING AGENTS "), Intent::PerformanceLow);
    }

    #[test]
    fn no_match_is_generic() {
        assert_eq!(classify("hello there"), Intent::Generic);
        assert_eq!(classify("xyz"), Intent::Generic);
    }

    #[test]
    fn phrases_outweigh_keywords() {
        // "conversion rate" phrase (4) + "conversion" (2) + "rate" (2).
        assert_eq!(classify("conversion rate"), Intent::Conversion);
        assert_eq!(classify("collection by state"), Intent::Regional);
        assert_eq!(classify("dpd bucket performance"), Intent::BucketAnalysis);
        assert_eq!(classify("monthly trend of payments"), Intent::TrendAnalysis);
    }

    #[test]
    fn ties_go_to_first_declared_intent() {
        // "agent" (AGENT_ANALYSIS, 2) and "band" (BUCKET_ANALYSIS, 2) tie;
        // BUCKET_ANALYSIS is declared first.
        assert_eq!(classify("agent band"), Intent::BucketAnalysis);
    }

    #[test]
    fn custom_rules() {
        const RULES: &[PatternRule] = &[PatternRule {
            intent: Intent::Search,
            phrases: &[],
            keywords: &["lookup"],
            weight: 1,
        }];
        let classifier = IntentClassifier::new(IntentRules::new(RULES));
        assert_eq!(classifier.classify(Some("lookup agent")), Intent::Search);
        assert_eq!(classifier.classify(Some("top agents")), Intent::Generic);
    }

    #[test]
    fn deterministic() {
        let classifier = IntentClassifier::default();
        let query = Some("compare north versus south collection");
        assert_eq!(classifier.classify(query), classifier.classify(query));
    }

    #[test]
    fn names_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(Intent::from_name(intent.as_str()), Some(intent));
        }
        assert_eq!(Intent::from_name("UNKNOWN"), None);
    }
}
