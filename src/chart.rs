//! Chart layout planning.
//!
//! The Query Service suggests one chart per result. Rates and amounts have
//! incompatible magnitudes, so a suggestion mixing both is split into several
//! panels before it reaches the renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{column::is_rate_column, format::format_bar_label, response::Row};

/// Category value of the summary row that is shown in the table only.
pub(crate) const GRAND_TOTAL: &str = "Grand Total";

/// Panels with more rows than this get no per-bar labels.
pub(crate) const DEFAULT_LABEL_ROW_LIMIT: usize = 12;

const AMOUNT_TITLE_SEPARATOR: &str = " & ";

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ChartType {
    Bar,
    HorizontalBar,
    Pie,
    Line,
    SingleValue,
    TableOnly,
}

impl ChartType {
    /// Whether results of this type are drawn as chart panels at all.
    fn is_plotted(self) -> bool {
        !matches!(self, Self::SingleValue | Self::TableOnly)
    }

    fn orientation(self) -> Option<Orientation> {
        match self {
            Self::Bar => Some(Orientation::Vertical),
            Self::HorizontalBar => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

/// Bar direction. Vertical bars put categories on the X axis; horizontal
/// bars put them on the Y axis.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Orientation {
    Vertical,
    Horizontal,
}

/// The Query Service's suggestion for visualizing a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ChartHint {
    pub(crate) chart_type: ChartType,
    pub(crate) x_key: String,
    pub(crate) y_keys: Vec<String>,
    pub(crate) title: String,
}

/// Labels for one plotted series, one entry per data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SeriesLabels {
    pub(crate) key: String,
    pub(crate) values: Vec<Option<String>>,
}

/// One chart panel ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ChartSpec {
    pub(crate) chart_type: ChartType,
    pub(crate) x_key: String,
    pub(crate) y_keys: Vec<String>,
    pub(crate) title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) orientation: Option<Orientation>,
    /// Drawn as one of several small panels side by side.
    pub(crate) compact: bool,
    /// Offset into the palette for the first series.
    pub(crate) color_index: usize,
    pub(crate) show_labels: bool,
    /// Empty when labels are suppressed.
    pub(crate) labels: Vec<SeriesLabels>,
    pub(crate) data: Vec<Row>,
}

impl ChartSpec {
    /// The y keys that are actually drawn. A pie only draws its first key.
    pub(crate) fn series(&self) -> &[String] {
        if self.chart_type == ChartType::Pie {
            &self.y_keys[..self.y_keys.len().min(1)]
        } else {
            &self.y_keys
        }
    }
}

/// Grouping of y keys into one panel, before data is attached.
#[derive(Debug, PartialEq)]
struct Panel {
    y_keys: Vec<String>,
    title: String,
    compact: bool,
    color_index: usize,
}

impl Panel {
    fn whole(hint: &ChartHint) -> Self {
        Self {
            y_keys: hint.y_keys.clone(),
            title: hint.title.clone(),
            compact: false,
            color_index: 0,
        }
    }

    fn single(key: &str, compact: bool, color_index: usize) -> Self {
        Self {
            y_keys: vec![key.to_string()],
            title: key.to_string(),
            compact,
            color_index,
        }
    }

    fn split_each(keys: &[&String]) -> Vec<Self> {
        keys.iter()
            .enumerate()
            .map(|(i, key)| Self::single(key, true, i))
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ChartPlanner {
    label_row_limit: usize,
}

impl Default for ChartPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_ROW_LIMIT)
    }
}

impl ChartPlanner {
    pub(crate) fn new(label_row_limit: usize) -> Self {
        Self { label_row_limit }
    }

    /// Plans the chart panels for a result.
    ///
    /// No hint, a `table_only` or `single_value` hint, or no plottable rows
    /// all yield an empty plan: the result is then shown as a table only.
    pub(crate) fn plan(&self, hint: Option<&ChartHint>, rows: &[Row]) -> Vec<ChartSpec> {
        let Some(hint) = hint else {
            return Vec::new();
        };
        if !hint.chart_type.is_plotted() || rows.is_empty() {
            return Vec::new();
        }

        let data = plottable_rows(&hint.x_key, rows);
        if data.is_empty() {
            return Vec::new();
        }

        layout(hint)
            .into_iter()
            .map(|panel| self.spec(hint, panel, &data))
            .collect()
    }

    fn spec(&self, hint: &ChartHint, panel: Panel, data: &[Row]) -> ChartSpec {
        let show_labels = data.len() <= self.label_row_limit;
        let mut spec = ChartSpec {
            chart_type: hint.chart_type,
            x_key: hint.x_key.clone(),
            y_keys: panel.y_keys,
            title: panel.title,
            orientation: hint.chart_type.orientation(),
            compact: panel.compact,
            color_index: panel.color_index,
            show_labels,
            labels: Vec::new(),
            data: data.to_vec(),
        };
        if show_labels {
            spec.labels = spec
                .series()
                .iter()
                .map(|key| SeriesLabels {
                    key: key.clone(),
                    values: data
                        .iter()
                        .map(|row| format_bar_label(key, row.get(key).unwrap_or(&Value::Null)))
                        .collect(),
                })
                .collect();
        }
        spec
    }
}

/// Rows that may be plotted: everything but the Grand Total row.
pub(crate) fn plottable_rows(x_key: &str, rows: &[Row]) -> Vec<Row> {
    rows.iter()
        .filter(|row| !is_grand_total(row.get(x_key)))
        .cloned()
        .collect()
}

pub(crate) fn is_grand_total(category: Option<&Value>) -> bool {
    matches!(category, Some(Value::String(s)) if s == GRAND_TOTAL)
}

fn layout(hint: &ChartHint) -> Vec<Panel> {
    if hint.y_keys.len() <= 1 {
        return vec![Panel::whole(hint)];
    }

    let (rate_keys, amount_keys): (Vec<&String>, Vec<&String>) =
        hint.y_keys.iter().partition(|key| is_rate_column(key));

    if rate_keys.is_empty() {
        return vec![Panel::whole(hint)];
    }
    if amount_keys.is_empty() {
        return Panel::split_each(&rate_keys);
    }

    let mut panels = if rate_keys.len() > 1 {
        Panel::split_each(&rate_keys)
    } else {
        vec![Panel::single(rate_keys[0], false, 0)]
    };
    panels.push(Panel {
        y_keys: amount_keys.iter().map(|key| (*key).clone()).collect(),
        title: amount_keys
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(AMOUNT_TITLE_SEPARATOR),
        compact: false,
        color_index: rate_keys.len(),
    });
    panels
}
