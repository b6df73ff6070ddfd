//! The three read-only demo queries.
//!
//! Each endpoint is split into a query function that only renders SQL and
//! an endpoint function that runs it against a [`Session`]. Every query
//! filters orders by [`NAME_PATTERN`] and returns the newest order first.

use std::collections::HashMap;

use criteria_core::error::Result;
use criteria_core::expr::{in_subquery, like};
use criteria_core::{Join, OrderBy, criteria_trace_rows};
use criteria_sqlite::builder::select::{SelectBuilder, SelectOrderSet};
use criteria_sqlite::{QueryBuilder, SQLiteSQL};

use crate::model::{
    ItemEntity, JoinRow, OrderSummary, SelectItem, SelectShoppingOrder, ShoppingOrderEntity,
    detach_back_references,
};
use crate::schema::{DemoSchema, Item, ShoppingOrder};
use crate::session::Session;

/// `LIKE` pattern every endpoint filters order names with.
pub const NAME_PATTERN: &str = "%my%";

pub type OrderQuery<'a> = SelectBuilder<'a, DemoSchema, SelectOrderSet, ShoppingOrder>;
pub type ItemQuery<'a> = SelectBuilder<'a, DemoSchema, SelectOrderSet, Item>;

//------------------------------------------------------------------------------
// Queries
//------------------------------------------------------------------------------

/// Every column of the matching orders.
pub fn all_entity_columns_query<'a>(schema: &DemoSchema) -> OrderQuery<'a> {
    let DemoSchema { shopping_order, .. } = *schema;
    QueryBuilder::new::<DemoSchema>()
        .select(())
        .from(shopping_order)
        .r#where(like(shopping_order.name, NAME_PATTERN))
        .order_by(OrderBy::desc(shopping_order.id))
}

/// Items owned by any matching order, by ascending id.
///
/// The owning orders are selected again by name inside the statement, so
/// only the pattern is bound however many orders match.
pub fn items_for_matching_orders_query<'a>(schema: &DemoSchema) -> ItemQuery<'a> {
    let DemoSchema {
        shopping_order,
        item,
    } = *schema;

    let matching_ids = QueryBuilder::new::<DemoSchema>()
        .select(shopping_order.id)
        .from(shopping_order)
        .r#where(like(shopping_order.name, NAME_PATTERN));

    QueryBuilder::new::<DemoSchema>()
        .select(())
        .from(item)
        .r#where(in_subquery(item.shopping_order_id, matching_ids))
        .order_by(OrderBy::asc(item.id))
}

/// `(id, name)` of the matching orders.
pub fn specific_columns_query<'a>(schema: &DemoSchema) -> OrderQuery<'a> {
    let DemoSchema { shopping_order, .. } = *schema;
    QueryBuilder::new::<DemoSchema>()
        .select((shopping_order.id, shopping_order.name))
        .from(shopping_order)
        .r#where(like(shopping_order.name, NAME_PATTERN))
        .order_by(OrderBy::desc(shopping_order.id))
}

/// Order and item id and name, one row per item of a matching order.
///
/// Orders without items drop out: the RIGHT join keeps unmatched items
/// instead, and those then fail the name filter.
pub fn join_query<'a>(schema: &DemoSchema) -> OrderQuery<'a> {
    let DemoSchema {
        shopping_order,
        item,
    } = *schema;

    let newest_order: SQLiteSQL<'a> = OrderBy::desc(shopping_order.id);
    let item_order: SQLiteSQL<'a> = OrderBy::asc(item.id);

    QueryBuilder::new::<DemoSchema>()
        .select((
            shopping_order.id,
            shopping_order.name,
            item.id,
            item.name,
        ))
        .from(shopping_order)
        .join_relation(Join::new().right(), &shopping_order.items())
        .r#where(like(shopping_order.name, NAME_PATTERN))
        .order_by([newest_order, item_order])
}

//------------------------------------------------------------------------------
// Endpoints
//------------------------------------------------------------------------------

/// Matching orders with their items attached.
///
/// Items are loaded with a second query filtered by the same pattern, which
/// is skipped when nothing matched. Back-references from items to their
/// order are cleared before returning.
pub fn simple_example_return_all_entity_columns(
    session: &Session<DemoSchema>,
) -> Result<Vec<ShoppingOrderEntity>> {
    let schema = session.schema();
    let rows: Vec<SelectShoppingOrder> = session.all(all_entity_columns_query(schema))?;
    let mut orders: Vec<ShoppingOrderEntity> = rows.into_iter().map(Into::into).collect();

    if !orders.is_empty() {
        let items: Vec<SelectItem> = session.all(items_for_matching_orders_query(schema))?;

        let mut by_order: HashMap<i64, Vec<ItemEntity>> = HashMap::new();
        for item in items {
            if let Some(order_id) = item.shopping_order_id {
                by_order.entry(order_id).or_default().push(item.into());
            }
        }
        for order in &mut orders {
            if let Some(items) = by_order.remove(&order.id) {
                order.item_list = items;
            }
        }
    }

    detach_back_references(&mut orders);
    criteria_trace_rows!("simple_example_return_all_entity_columns", orders.len());
    Ok(orders)
}

pub fn with_specific_columns(session: &Session<DemoSchema>) -> Result<Vec<OrderSummary>> {
    let rows: Vec<OrderSummary> = session.all(specific_columns_query(session.schema()))?;
    criteria_trace_rows!("with_specific_columns", rows.len());
    Ok(rows)
}

pub fn join(session: &Session<DemoSchema>) -> Result<Vec<JoinRow>> {
    let rows: Vec<JoinRow> = session.all(join_query(session.schema()))?;
    criteria_trace_rows!("join", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::SQLiteValue;

    #[test]
    fn all_entity_columns_sql() {
        let query = all_entity_columns_query(&DemoSchema::new());
        assert_eq!(
            query.sql(),
            r#"SELECT "shopping_order"."id", "shopping_order"."name", "shopping_order"."delivered" FROM "shopping_order" WHERE "shopping_order"."name" LIKE ? ORDER BY "shopping_order"."id" DESC"#
        );
        assert_eq!(query.params(), vec![&SQLiteValue::from(NAME_PATTERN)]);
    }

    #[test]
    fn items_for_matching_orders_sql() {
        let query = items_for_matching_orders_query(&DemoSchema::new());
        assert_eq!(
            query.sql(),
            r#"SELECT "item"."id", "item"."name", "item"."shopping_order_id" FROM "item" WHERE "item"."shopping_order_id" IN (SELECT "shopping_order"."id" FROM "shopping_order" WHERE "shopping_order"."name" LIKE ?) ORDER BY "item"."id" ASC"#
        );
        assert_eq!(query.params(), vec![&SQLiteValue::from(NAME_PATTERN)]);
    }

    #[test]
    fn specific_columns_sql() {
        let query = specific_columns_query(&DemoSchema::new());
        assert_eq!(
            query.sql(),
            r#"SELECT "shopping_order"."id", "shopping_order"."name" FROM "shopping_order" WHERE "shopping_order"."name" LIKE ? ORDER BY "shopping_order"."id" DESC"#
        );
    }

    #[test]
    fn join_sql_keeps_right_join() {
        let query = join_query(&DemoSchema::new());
        assert_eq!(
            query.sql(),
            r#"SELECT "shopping_order"."id", "shopping_order"."name", "item"."id", "item"."name" FROM "shopping_order" RIGHT JOIN "item" ON "item"."shopping_order_id" = "shopping_order"."id" WHERE "shopping_order"."name" LIKE ? ORDER BY "shopping_order"."id" DESC, "item"."id" ASC"#
        );
    }
}
