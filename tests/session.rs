mod common;

use criteria_demo::endpoints;
use criteria_demo::prelude::*;

#[test]
fn data_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("criteria-demo.db");

    {
        let mut session = Session::open(&path, DemoSchema::new()).unwrap();
        session.create().unwrap();
        seed_demo(&mut session).unwrap();
    }

    let session = Session::open(&path, DemoSchema::new()).unwrap();
    session.create().unwrap();
    let rows = endpoints::with_specific_columns(&session).unwrap();
    assert_eq!(
        rows,
        vec![(3, "my second order".to_string()), (1, "myOrder".to_string())]
    );
}

#[test]
fn foreign_keys_are_enforced() {
    let session = common::empty_session();
    let DemoSchema { item, .. } = *session.schema();

    let result = session.execute(
        session
            .insert(item)
            .values([criteria_demo::model::InsertItem::new("dangling")
                .with_id(1)
                .with_shopping_order_id(99)]),
    );
    assert!(matches!(result, Err(CriteriaError::Rusqlite(_))));
}

#[test]
fn create_is_idempotent() {
    let session = common::empty_session();
    session.create().unwrap();
    assert!(endpoints::join(&session).unwrap().is_empty());
}

fn order_count(session: &Session<DemoSchema>) -> usize {
    let order = session.schema().shopping_order;
    let ids: Vec<i64> = session.all(session.select(order.id).from(order)).unwrap();
    ids.len()
}

#[test]
fn transaction_commits_on_ok() {
    let mut session = common::empty_session();
    let written = session
        .transaction(SQLiteTransactionType::Deferred, |tx| {
            assert_eq!(tx.tx_type(), SQLiteTransactionType::Deferred);
            let order = tx.schema().shopping_order;
            tx.execute(tx.insert(order).values([InsertShoppingOrder::new("myOrder")]))
        })
        .unwrap();
    assert_eq!(written, 1);
    assert_eq!(order_count(&session), 1);
}

#[test]
fn transaction_rolls_back_on_error() {
    let mut session = common::empty_session();
    let result: Result<(), CriteriaError> =
        session.transaction(SQLiteTransactionType::Immediate, |tx| {
            let order = tx.schema().shopping_order;
            tx.execute(tx.insert(order).values([InsertShoppingOrder::new("myOrder")]))?;
            Err(CriteriaError::Other("abort".into()))
        });
    assert!(matches!(result, Err(CriteriaError::Other(_))));
    assert_eq!(order_count(&session), 0);
}

#[test]
fn transaction_rolls_back_on_panic() {
    let mut session = common::empty_session();
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        session.transaction::<_, ()>(SQLiteTransactionType::Exclusive, |tx| {
            let order = tx.schema().shopping_order;
            tx.execute(tx.insert(order).values([InsertShoppingOrder::new("myOrder")]))?;
            panic!("boom");
        })
    }));
    assert!(outcome.is_err());
    assert_eq!(order_count(&session), 0);
}
