use std::time::Duration;

use super::Intent;

pub(crate) const DEFAULT_ROTATION_INTERVAL_MS: u64 = 2500;

impl Intent {
    /// Messages cycled on screen while a query of this intent runs.
    pub(crate) fn loading_messages(self) -> &'static [&'static str] {
        match self {
            Intent::PerformanceTop => &[
                "🏆 Finding your star performers...",
                "⭐ Identifying top achievers...",
                "🎯 Spotting excellence in action...",
            ],
            Intent::PerformanceLow => &[
                "🔍 Identifying areas for improvement...",
                "📉 Analyzing underperforming metrics...",
                "💡 Finding growth opportunities...",
            ],
            Intent::Regional => &[
                "🗺️ Mapping regional performance...",
                "🌍 Analyzing geographic patterns...",
                "📍 Breaking down location data...",
            ],
            Intent::Conversion => &[
                "📊 Analyzing conversion patterns...",
                "💹 Calculating success metrics...",
                "🎯 Measuring conversion rates...",
            ],
            Intent::BucketAnalysis => &[
                "📦 Segmenting data by buckets...",
                "📊 Analyzing bucket performance...",
                "🎯 Breaking down by segments...",
            ],
            Intent::AgentAnalysis => &[
                "👥 Analyzing agent performance...",
                "🔍 Evaluating team metrics...",
                "📈 Tracking individual results...",
            ],
            Intent::TrendAnalysis => &[
                "📈 Identifying trends over time...",
                "⏱️ Analyzing temporal patterns...",
                "📅 Tracking historical data...",
            ],
            Intent::Comparison => &[
                "⚖️ Comparing metrics...",
                "🔄 Analyzing differences...",
                "📊 Running comparison analysis...",
            ],
            Intent::Aggregate => &[
                "🧮 Calculating totals...",
                "📊 Aggregating portfolio data...",
                "💯 Computing overall metrics...",
            ],
            Intent::Search => &[
                "🔎 Searching through data...",
                "🔍 Finding matching records...",
                "📋 Retrieving results...",
            ],
            Intent::Generic => &[
                "🤖 AI is analyzing your query...",
                "✨ Processing your request...",
                "💭 Thinking through your question...",
            ],
        }
    }
}

/// Looks up messages by intent name; unknown names get the generic set.
pub(crate) fn loading_messages_for(name: &str) -> &'static [&'static str] {
    Intent::from_name(name)
        .unwrap_or(Intent::Generic)
        .loading_messages()
}

/// Picks which loading message is on screen at a point in time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MessageRotation {
    messages: &'static [&'static str],
    interval: Duration,
    rotate: bool,
}

impl MessageRotation {
    pub(crate) fn new(intent: Intent, interval: Duration, rotate: bool) -> Self {
        Self {
            messages: intent.loading_messages(),
            interval,
            rotate,
        }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// The message shown once `elapsed` has passed since the query started.
    pub(crate) fn message_at(&self, elapsed: Duration) -> &'static str {
        let Some(&first) = self.messages.first() else {
            return "";
        };
        if !self.rotate || self.messages.len() <= 1 || self.interval.is_zero() {
            return first;
        }
        let ticks = elapsed.as_millis() / self.interval.as_millis();
        let index = usize::try_from(ticks % self.messages.len() as u128).unwrap_or_default();
        self.messages[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_has_messages() {
        for intent in Intent::ALL {
            let messages = intent.loading_messages();
            assert!((2..=3).contains(&messages.len()), "{intent:?}");
        }
    }

    #[test]
    fn unknown_name_falls_back_to_generic() {
        assert_eq!(
            loading_messages_for("NOT_AN_INTENT"),
            Intent::Generic.loading_messages()
        );
        assert_eq!(
            loading_messages_for("REGIONAL"),
            Intent::Regional.loading_messages()
        );
    }

    #[test]
    fn rotation_cycles() {
        let interval = Duration::from_millis(DEFAULT_ROTATION_INTERVAL_MS);
        let rotation = MessageRotation::new(Intent::Search, interval, true);
        let messages = Intent::Search.loading_messages();
        assert_eq!(rotation.message_at(Duration::ZERO), messages[0]);
        assert_eq!(rotation.message_at(Duration::from_millis(2499)), messages[0]);
        assert_eq!(rotation.message_at(Duration::from_millis(2500)), messages[1]);
        assert_eq!(rotation.message_at(Duration::from_millis(5000)), messages[2]);
        assert_eq!(rotation.message_at(Duration::from_millis(7500)), messages[0]);
    }

    #[test]
    fn rotation_disabled_shows_first() {
        let interval = Duration::from_millis(DEFAULT_ROTATION_INTERVAL_MS);
        let rotation = MessageRotation::new(Intent::Regional, interval, false);
        assert_eq!(
            rotation.message_at(Duration::from_secs(60)),
            Intent::Regional.loading_messages()[0]
        );
    }
}
