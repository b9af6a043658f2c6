//! Table columns of the catalog view.

use serde::{Deserialize, Serialize};

/// One column of the product table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "category")]
    Category,
    #[serde(rename = "subcategory")]
    Subcategory,
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "sale_price")]
    SalePrice,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::Name,
        Column::Category,
        Column::Subcategory,
        Column::CreatedAt,
        Column::Price,
        Column::SalePrice,
    ];

    /// Field name of the record this column shows.
    pub const fn key(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Category => "category",
            Column::Subcategory => "subcategory",
            Column::CreatedAt => "createdAt",
            Column::Price => "price",
            Column::SalePrice => "sale_price",
        }
    }

    /// Table header text.
    pub const fn header(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Category => "Category",
            Column::Subcategory => "Subcategory",
            Column::CreatedAt => "Created At",
            Column::Price => "Price",
            Column::SalePrice => "Sale Price",
        }
    }
}
