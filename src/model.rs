//! Row types, insert rows and the serialized views returned by the endpoints.

use std::borrow::Cow;

use criteria_core::{FromRow, SQLColumnInfo, SQLTableInfo, ToSQL, error::CriteriaError};
use criteria_sqlite::{SQLiteInsert, SQLiteSQL, SQLiteTable, SQLiteValue};
use serde::{Deserialize, Serialize};

use crate::schema::{Item, ShoppingOrder};

//------------------------------------------------------------------------------
// Select rows
//------------------------------------------------------------------------------

/// One row of `shopping_order`, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectShoppingOrder {
    pub id: i64,
    pub name: String,
    pub delivered: bool,
}

impl<'r> FromRow<rusqlite::Row<'r>> for SelectShoppingOrder {
    const COLUMN_COUNT: usize = 3;

    fn from_row_at(row: &rusqlite::Row<'r>, offset: usize) -> Result<Self, CriteriaError> {
        let (id, name, delivered) = <(i64, String, bool)>::from_row_at(row, offset)?;
        Ok(Self {
            id,
            name,
            delivered,
        })
    }
}

/// One row of `item`, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub id: i64,
    pub name: String,
    pub shopping_order_id: Option<i64>,
}

impl<'r> FromRow<rusqlite::Row<'r>> for SelectItem {
    const COLUMN_COUNT: usize = 3;

    fn from_row_at(row: &rusqlite::Row<'r>, offset: usize) -> Result<Self, CriteriaError> {
        let (id, name, shopping_order_id) =
            <(i64, String, Option<i64>)>::from_row_at(row, offset)?;
        Ok(Self {
            id,
            name,
            shopping_order_id,
        })
    }
}

/// `(id, name)` of an order.
pub type OrderSummary = (i64, String);

/// `(order id, order name, item id, item name)`.
///
/// Every position is optional: an outer join may leave either side empty.
pub type JoinRow = (Option<i64>, Option<String>, Option<i64>, Option<String>);

//------------------------------------------------------------------------------
// Insert rows
//------------------------------------------------------------------------------

/// A new `shopping_order` row. Without an id, SQLite assigns the next rowid.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertShoppingOrder<'a> {
    pub id: Option<i64>,
    pub name: Cow<'a, str>,
    pub delivered: bool,
}

impl<'a> InsertShoppingOrder<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id: None,
            name: name.into(),
            delivered: false,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_delivered(mut self, delivered: bool) -> Self {
        self.delivered = delivered;
        self
    }
}

impl<'a> SQLiteInsert<'a> for InsertShoppingOrder<'a> {
    type Table = ShoppingOrder;

    fn columns(&self) -> &'static [&'static dyn SQLColumnInfo] {
        ShoppingOrder::new().definition().columns()
    }

    fn values(&self) -> SQLiteSQL<'a> {
        (
            self.id,
            SQLiteValue::Text(self.name.clone()),
            self.delivered,
        )
            .into_sql()
    }
}

/// A new `item` row; `shopping_order_id` of `None` stores an orphan item.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertItem<'a> {
    pub id: Option<i64>,
    pub name: Cow<'a, str>,
    pub shopping_order_id: Option<i64>,
}

impl<'a> InsertItem<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id: None,
            name: name.into(),
            shopping_order_id: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_shopping_order_id(mut self, shopping_order_id: i64) -> Self {
        self.shopping_order_id = Some(shopping_order_id);
        self
    }
}

impl<'a> SQLiteInsert<'a> for InsertItem<'a> {
    type Table = Item;

    fn columns(&self) -> &'static [&'static dyn SQLColumnInfo] {
        Item::new().definition().columns()
    }

    fn values(&self) -> SQLiteSQL<'a> {
        (
            self.id,
            SQLiteValue::Text(self.name.clone()),
            self.shopping_order_id,
        )
            .into_sql()
    }
}

//------------------------------------------------------------------------------
// Serialized views
//------------------------------------------------------------------------------

/// An order with its items, as returned by the full-entity endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingOrderEntity {
    pub id: i64,
    pub name: String,
    pub delivered: bool,
    pub item_list: Vec<ItemEntity>,
}

/// An item nested under its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEntity {
    pub id: i64,
    pub name: String,
    pub shopping_order: Option<OrderRef>,
}

/// Back-reference from an item to the order that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef {
    pub id: i64,
}

impl From<SelectShoppingOrder> for ShoppingOrderEntity {
    fn from(row: SelectShoppingOrder) -> Self {
        Self {
            id: row.id,
            name: row.name,
            delivered: row.delivered,
            item_list: Vec::new(),
        }
    }
}

impl From<SelectItem> for ItemEntity {
    fn from(row: SelectItem) -> Self {
        Self {
            id: row.id,
            name: row.name,
            shopping_order: row.shopping_order_id.map(|id| OrderRef { id }),
        }
    }
}

/// Clears each item's back-reference to its order, so an order serializes
/// without pointing back at itself through its items.
pub fn detach_back_references(orders: &mut [ShoppingOrderEntity]) {
    for order in orders.iter_mut().filter(|order| !order.item_list.is_empty()) {
        for item in &mut order.item_list {
            item.shopping_order = None;
        }
    }
}
