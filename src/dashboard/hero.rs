use serde::Serialize;
use serde_json::Value;

use crate::{
    chart::{ChartHint, ChartType},
    column::is_rate_column,
    format::{as_number, format_number, format_percent, MISSING},
    response::Row,
};

/// One large labeled number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct HeroValue {
    pub(crate) label: String,
    pub(crate) value: Value,
    pub(crate) is_rate: bool,
    pub(crate) display: String,
}

/// KPI display for results that reduce to a handful of numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Hero {
    pub(crate) title: String,
    pub(crate) values: Vec<HeroValue>,
}

impl Hero {
    /// Builds the hero for a `single_value` hint from the first row.
    pub(crate) fn from_result(hint: Option<&ChartHint>, rows: &[Row]) -> Option<Self> {
        let hint = hint.filter(|hint| hint.chart_type == ChartType::SingleValue)?;
        let row = rows.first()?;

        let values = hint
            .y_keys
            .iter()
            .map(|key| {
                let value = row.get(key).cloned().unwrap_or(Value::Null);
                let is_rate = is_rate_column(key);
                let display = display_value(&value, is_rate);
                HeroValue {
                    label: key.clone(),
                    value,
                    is_rate,
                    display,
                }
            })
            .collect();

        Some(Self {
            title: hint.title.clone(),
            values,
        })
    }
}

fn display_value(value: &Value, is_rate: bool) -> String {
    if value.is_null() {
        return MISSING.to_string();
    }
    if !is_rate {
        return format_number(value);
    }
    // Numeric strings are shown as percentages too; anything else verbatim.
    match as_number(value) {
        Some(n) => format_percent(&Value::from(n)),
        None => format_number(value),
    }
}
