//! Column definitions, visibility and cell formatting.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use catalog_core::Entity;
use catalog_products::ProductRecord;
use catalog_query::Column;

/// Static description of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub column: Column,
    pub header: &'static str,
    pub sortable: bool,
}

const fn def(column: Column) -> ColumnDef {
    ColumnDef {
        column,
        header: column.header(),
        sortable: true,
    }
}

static COLUMN_DEFS: [ColumnDef; 7] = [
    def(Column::Id),
    def(Column::Name),
    def(Column::Category),
    def(Column::Subcategory),
    def(Column::CreatedAt),
    def(Column::Price),
    def(Column::SalePrice),
];

/// All columns in display order.
pub fn column_defs() -> &'static [ColumnDef] {
    &COLUMN_DEFS
}

/// Columns the user has hidden. Everything starts visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: BTreeSet<Column>,
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    /// Flip one column; returns whether it is now visible.
    pub fn toggle(&mut self, column: Column) -> bool {
        if self.hidden.remove(&column) {
            true
        } else {
            self.hidden.insert(column);
            false
        }
    }

    pub fn visible_defs(&self) -> impl Iterator<Item = &'static ColumnDef> + '_ {
        column_defs().iter().filter(|d| self.is_visible(d.column))
    }
}

/// `$12.50`, or `N/A` when the amount is absent.
///
/// Halves of a cent round away from zero (`2.125` renders as `$2.13`).
pub fn format_price(amount: Option<f64>) -> String {
    match amount {
        Some(v) => format!("${:.2}", (v * 100.0).round() / 100.0),
        None => "N/A".to_string(),
    }
}

/// `05 Jan 2024, 14:30` (UTC).
pub fn format_created_at(ts: DateTime<Utc>) -> String {
    ts.format("%d %b %Y, %H:%M").to_string()
}

/// Display text of one cell.
pub fn cell_text(record: &ProductRecord, column: Column) -> String {
    match column {
        Column::Id => record.id().to_string(),
        Column::Name => record.name().to_string(),
        Column::Category => record.category().to_string(),
        Column::Subcategory => record.subcategory().to_string(),
        Column::CreatedAt => format_created_at(record.created_at()),
        Column::Price => format_price(record.price()),
        Column::SalePrice => format_price(record.sale_price()),
    }
}
