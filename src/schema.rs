//! Mapped tables of the demo schema.
//!
//! ```text
//! shopping_order (id PK, name, delivered)
//!       1
//!       │ itemList
//!       *
//! item (id PK, name, shopping_order_id → shopping_order.id, nullable)
//! ```

use criteria_core::{SQL, SQLColumnInfo, ToSQL};
use criteria_sqlite::{
    SQLiteColumn, SQLiteColumnDef, SQLiteRelation, SQLiteSQL, SQLiteSchema, SQLiteTable,
    SQLiteTableDef, SQLiteType, SQLiteValue,
};

//------------------------------------------------------------------------------
// shopping_order
//------------------------------------------------------------------------------

static SHOPPING_ORDER_COLUMNS: [&dyn SQLColumnInfo; 3] = [
    &SHOPPING_ORDER_ID,
    &SHOPPING_ORDER_NAME,
    &SHOPPING_ORDER_DELIVERED,
];

pub static SHOPPING_ORDER: SQLiteTableDef =
    SQLiteTableDef::new("shopping_order", &SHOPPING_ORDER_COLUMNS);

pub static SHOPPING_ORDER_ID: SQLiteColumnDef =
    SQLiteColumnDef::new(&SHOPPING_ORDER, "id", SQLiteType::Integer).primary();

pub static SHOPPING_ORDER_NAME: SQLiteColumnDef =
    SQLiteColumnDef::new(&SHOPPING_ORDER, "name", SQLiteType::Text).not_null();

pub static SHOPPING_ORDER_DELIVERED: SQLiteColumnDef =
    SQLiteColumnDef::new(&SHOPPING_ORDER, "delivered", SQLiteType::Integer)
        .not_null()
        .default_value("0");

//------------------------------------------------------------------------------
// item
//------------------------------------------------------------------------------

static ITEM_COLUMNS: [&dyn SQLColumnInfo; 3] = [&ITEM_ID, &ITEM_NAME, &ITEM_SHOPPING_ORDER_ID];

pub static ITEM: SQLiteTableDef = SQLiteTableDef::new("item", &ITEM_COLUMNS);

pub static ITEM_ID: SQLiteColumnDef =
    SQLiteColumnDef::new(&ITEM, "id", SQLiteType::Integer).primary();

pub static ITEM_NAME: SQLiteColumnDef =
    SQLiteColumnDef::new(&ITEM, "name", SQLiteType::Text).not_null();

pub static ITEM_SHOPPING_ORDER_ID: SQLiteColumnDef =
    SQLiteColumnDef::new(&ITEM, "shopping_order_id", SQLiteType::Integer)
        .references(&SHOPPING_ORDER_ID);

//------------------------------------------------------------------------------
// Typed handles
//------------------------------------------------------------------------------

/// Column handles of `shopping_order`.
#[derive(Debug, Clone, Copy)]
pub struct ShoppingOrder {
    pub id: SQLiteColumn,
    pub name: SQLiteColumn,
    pub delivered: SQLiteColumn,
}

impl ShoppingOrder {
    pub fn new() -> Self {
        Self {
            id: SQLiteColumn::new(&SHOPPING_ORDER_ID),
            name: SQLiteColumn::new(&SHOPPING_ORDER_NAME),
            delivered: SQLiteColumn::new(&SHOPPING_ORDER_DELIVERED),
        }
    }

    /// The items owned by an order, joined through `item.shopping_order_id`.
    pub fn items(&self) -> SQLiteRelation {
        SQLiteRelation::one_to_many("itemList", self.id, Item::new().shopping_order_id)
    }
}

impl Default for ShoppingOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ToSQL<'a, SQLiteValue<'a>> for ShoppingOrder {
    fn to_sql(&self) -> SQLiteSQL<'a> {
        SQL::table(&SHOPPING_ORDER)
    }
}

impl<'a> SQLiteTable<'a> for ShoppingOrder {
    fn definition(&self) -> &'static SQLiteTableDef {
        &SHOPPING_ORDER
    }
}

/// Column handles of `item`.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub id: SQLiteColumn,
    pub name: SQLiteColumn,
    pub shopping_order_id: SQLiteColumn,
}

impl Item {
    pub fn new() -> Self {
        Self {
            id: SQLiteColumn::new(&ITEM_ID),
            name: SQLiteColumn::new(&ITEM_NAME),
            shopping_order_id: SQLiteColumn::new(&ITEM_SHOPPING_ORDER_ID),
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ToSQL<'a, SQLiteValue<'a>> for Item {
    fn to_sql(&self) -> SQLiteSQL<'a> {
        SQL::table(&ITEM)
    }
}

impl<'a> SQLiteTable<'a> for Item {
    fn definition(&self) -> &'static SQLiteTableDef {
        &ITEM
    }
}

//------------------------------------------------------------------------------
// Schema
//------------------------------------------------------------------------------

/// The two tables queried by the demo endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSchema {
    pub shopping_order: ShoppingOrder,
    pub item: Item,
}

impl DemoSchema {
    pub fn new() -> Self {
        Self {
            shopping_order: ShoppingOrder::new(),
            item: Item::new(),
        }
    }
}

impl SQLiteSchema for DemoSchema {
    fn tables(&self) -> Vec<&'static SQLiteTableDef> {
        vec![&SHOPPING_ORDER, &ITEM]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_parent_table_first() {
        let statements = DemoSchema::new().create_statements();
        assert_eq!(
            statements,
            vec![
                r#"CREATE TABLE IF NOT EXISTS "shopping_order" ("id" INTEGER PRIMARY KEY, "name" TEXT NOT NULL, "delivered" INTEGER NOT NULL DEFAULT 0)"#,
                r#"CREATE TABLE IF NOT EXISTS "item" ("id" INTEGER PRIMARY KEY, "name" TEXT NOT NULL, "shopping_order_id" INTEGER REFERENCES "shopping_order"("id"))"#,
            ]
        );
    }

    #[test]
    fn items_relation_joins_child_to_parent() {
        let relation = ShoppingOrder::new().items();
        assert_eq!(relation.name(), "itemList");
        assert_eq!(
            relation.on().sql(),
            r#""item"."shopping_order_id" = "shopping_order"."id""#
        );
    }
}
