use serde::Serialize;
use serde_json::Value;

use crate::{
    chart::is_grand_total,
    column::ColumnKind,
    format::{format_number, format_percent, MISSING},
    response::Row,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TableColumn {
    pub(crate) name: String,
    pub(crate) kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TableRow {
    pub(crate) cells: Vec<String>,
    /// The summary row, highlighted rather than plotted.
    pub(crate) grand_total: bool,
}

/// The raw result table with every cell formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TableView {
    pub(crate) columns: Vec<TableColumn>,
    pub(crate) rows: Vec<TableRow>,
}

impl TableView {
    pub(crate) fn new(columns: &[String], rows: &[Row]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let columns: Vec<TableColumn> = columns
            .iter()
            .map(|name| TableColumn {
                name: name.clone(),
                kind: ColumnKind::of(name),
            })
            .collect();

        let rows = rows
            .iter()
            .map(|row| {
                // The summary row is marked by its first column.
                let grand_total = columns
                    .first()
                    .is_some_and(|first| is_grand_total(row.get(&first.name)));
                let cells = columns
                    .iter()
                    .map(|column| format_cell(row.get(&column.name), column.kind))
                    .collect();
                TableRow { cells, grand_total }
            })
            .collect();

        Some(Self { columns, rows })
    }
}

fn format_cell(value: Option<&Value>, kind: ColumnKind) -> String {
    match value {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(value @ Value::Number(_)) if kind == ColumnKind::Rate => format_percent(value),
        Some(value) => format_number(value),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        let Value::Object(row) = value else {
            unreachable!()
        };
        row
    }

    #[test]
    fn cells_are_formatted_by_column_kind() {
        let columns = vec![
            "State".to_string(),
            "Conversion Rate".to_string(),
            "MTD Collection".to_string(),
        ];
        let rows = vec![
            row(json!({"State": "Kerala", "Conversion Rate": 12.5, "MTD Collection": 1_250_000})),
            row(json!({"State": "Goa", "Conversion Rate": null, "MTD Collection": "n/a"})),
            row(json!({"State": "Grand Total", "Conversion Rate": 11.0, "MTD Collection": 2_000_000})),
        ];
        let table = TableView::new(&columns, &rows).unwrap();

        assert_eq!(table.columns[0].kind, ColumnKind::Plain);
        assert_eq!(table.columns[1].kind, ColumnKind::Rate);
        assert_eq!(table.columns[2].kind, ColumnKind::Amount);

        assert_eq!(table.rows[0].cells, vec!["Kerala", "12.50%", "12,50,000"]);
        assert_eq!(table.rows[1].cells, vec!["Goa", "-", "n/a"]);
        assert!(!table.rows[0].grand_total);
        assert!(table.rows[2].grand_total);
    }

    #[test]
    fn empty_result_has_no_table() {
        assert!(TableView::new(&["State".to_string()], &[]).is_none());
    }
}
