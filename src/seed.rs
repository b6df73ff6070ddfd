//! Fixed demo data set.

use criteria_core::error::Result;
use criteria_sqlite::SQLiteTransactionType;
use serde::Serialize;

use crate::model::{InsertItem, InsertShoppingOrder};
use crate::schema::DemoSchema;
use crate::session::Session;

/// Number of rows written by [`seed_demo`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub orders: usize,
    pub items: usize,
}

fn demo_orders() -> [InsertShoppingOrder<'static>; 4] {
    [
        InsertShoppingOrder::new("myOrder").with_id(1),
        InsertShoppingOrder::new("other").with_id(2).with_delivered(true),
        InsertShoppingOrder::new("my second order")
            .with_id(3)
            .with_delivered(true),
        InsertShoppingOrder::new("MyUppercase").with_id(4),
    ]
}

fn demo_items() -> [InsertItem<'static>; 5] {
    [
        InsertItem::new("A").with_id(10).with_shopping_order_id(1),
        InsertItem::new("B").with_id(11).with_shopping_order_id(1),
        InsertItem::new("C").with_id(12).with_shopping_order_id(2),
        InsertItem::new("D").with_id(13).with_shopping_order_id(3),
        InsertItem::new("orphan").with_id(14),
    ]
}

/// Replaces the contents of both tables with the demo data set.
///
/// Orders 1 and 3 match `%my%`; order 4 only matches case-insensitively.
/// Item 14 belongs to no order. Everything runs in one transaction, so a
/// failure leaves the previous rows in place.
pub fn seed_demo(session: &mut Session<DemoSchema>) -> Result<SeedReport> {
    let report = session.transaction(SQLiteTransactionType::Immediate, |tx| {
        let DemoSchema {
            shopping_order,
            item,
        } = *tx.schema();

        tx.execute(tx.delete(item))?;
        tx.execute(tx.delete(shopping_order))?;

        let orders = tx.execute(tx.insert(shopping_order).values(demo_orders()))?;
        let items = tx.execute(tx.insert(item).values(demo_items()))?;
        Ok(SeedReport { orders, items })
    })?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        orders = report.orders,
        items = report.items,
        "seeded demo data"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_twice_replaces_rows() {
        let mut session = Session::open_in_memory(DemoSchema::new()).unwrap();
        session.create().unwrap();

        let first = seed_demo(&mut session).unwrap();
        let second = seed_demo(&mut session).unwrap();
        assert_eq!(first, SeedReport { orders: 4, items: 5 });
        assert_eq!(first, second);

        let order = session.schema().shopping_order;
        let ids: Vec<i64> = session.all(session.select(order.id).from(order)).unwrap();
        assert_eq!(ids.len(), 4);
    }
}
