#![allow(dead_code)]

use criteria_demo::model::{InsertItem, InsertShoppingOrder};
use criteria_demo::prelude::*;

/// An empty in-memory session with both tables created.
pub fn empty_session() -> Session<DemoSchema> {
    let session = Session::open_in_memory(DemoSchema::new()).expect("open session");
    session.create().expect("create tables");
    session
}

/// A session holding the full demo data set.
pub fn seeded_session() -> Session<DemoSchema> {
    let mut session = empty_session();
    seed_demo(&mut session).expect("seed demo data");
    session
}

/// Two orders, one of them matching, and two items of the matching order.
pub fn scenario_session() -> Session<DemoSchema> {
    let session = empty_session();
    let DemoSchema {
        shopping_order,
        item,
    } = *session.schema();

    session
        .execute(session.insert(shopping_order).values([
            InsertShoppingOrder::new("myOrder").with_id(1),
            InsertShoppingOrder::new("other").with_id(2),
        ]))
        .expect("insert orders");
    session
        .execute(session.insert(item).values([
            InsertItem::new("A").with_id(10).with_shopping_order_id(1),
            InsertItem::new("B").with_id(11).with_shopping_order_id(1),
        ]))
        .expect("insert items");
    session
}
