//! Rendering of predicate and ordering expressions.

use criteria_core::expr::*;
use criteria_core::{OrderBy, SQL, SQLColumnInfo, SQLParam, SQLTableInfo, ToSQL};

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Int(i64),
    Text(String),
}

impl SQLParam for Value {}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

struct Table;

impl SQLTableInfo for Table {
    fn name(&self) -> &'static str {
        "shopping_order"
    }

    fn columns(&self) -> &'static [&'static dyn SQLColumnInfo] {
        &COLUMNS
    }
}

struct Column(&'static str);

impl SQLColumnInfo for Column {
    fn name(&self) -> &'static str {
        self.0
    }

    fn r#type(&self) -> &'static str {
        "INTEGER"
    }

    fn is_primary_key(&self) -> bool {
        self.0 == "id"
    }

    fn is_not_null(&self) -> bool {
        true
    }

    fn table(&self) -> &'static dyn SQLTableInfo {
        &TABLE
    }
}

static TABLE: Table = Table;
static ID: Column = Column("id");
static NAME: Column = Column("name");
static COLUMNS: [&dyn SQLColumnInfo; 2] = [&ID, &NAME];

fn id() -> &'static dyn SQLColumnInfo {
    &ID
}

fn name() -> &'static dyn SQLColumnInfo {
    &NAME
}

fn render(sql: SQL<'static, Value>) -> (String, Vec<Value>) {
    let (text, params) = sql.build();
    (text, params.into_iter().cloned().collect())
}

#[test]
fn comparisons_bind_right_operand() {
    let (text, params) = render(eq(id(), 1_i64));
    assert_eq!(text, r#""shopping_order"."id" = ?"#);
    assert_eq!(params, vec![Value::Int(1)]);

    let not_equal: SQL<'_, Value> = neq(id(), 1_i64);
    assert_eq!(not_equal.sql(), r#""shopping_order"."id" <> ?"#);
    let at_least: SQL<'_, Value> = gte(id(), 1_i64);
    assert_eq!(at_least.sql(), r#""shopping_order"."id" >= ?"#);
    let unlike: SQL<'_, Value> = not_like(name(), "%my%");
    assert_eq!(unlike.sql(), r#""shopping_order"."name" NOT LIKE ?"#);
}

#[test]
fn and_or_parenthesize_only_when_combining() {
    let matches: SQL<'_, Value> = like(name(), "%my%");
    let single: SQL<'_, Value> = and([matches]);
    assert_eq!(single.sql(), r#""shopping_order"."name" LIKE ?"#);

    let above: SQL<'_, Value> = gt(id(), 5_i64);
    let below: SQL<'_, Value> = lt(id(), 9_i64);
    let range: SQL<'_, Value> = and([above, below]);
    let first: SQL<'_, Value> = eq(id(), 1_i64);
    let (text, params) = render(or([first, range]));
    assert_eq!(
        text,
        r#"("shopping_order"."id" = ? OR ("shopping_order"."id" > ? AND "shopping_order"."id" < ?))"#
    );
    assert_eq!(params, vec![Value::Int(1), Value::Int(5), Value::Int(9)]);

    let empty: SQL<'_, Value> = and(Vec::<SQL<'_, Value>>::new());
    assert!(empty.chunks.is_empty());
}

#[test]
fn not_wraps_compound_conditions() {
    let missing: SQL<'_, Value> = is_null(id());
    let negated: SQL<'_, Value> = not(missing);
    assert_eq!(negated.sql(), r#"NOT ("shopping_order"."id" IS NULL)"#);
    let bare: SQL<'_, Value> = not(SQL::raw("flag"));
    assert_eq!(bare.sql(), "NOT flag");
}

#[test]
fn in_array_with_and_without_values() {
    let (text, params) = render(in_array(id(), [1_i64, 3]));
    assert_eq!(text, r#""shopping_order"."id" IN (?, ?)"#);
    assert_eq!(params, vec![Value::Int(1), Value::Int(3)]);

    let empty: SQL<'_, Value> = in_array(id(), Vec::<i64>::new());
    assert_eq!(empty.sql(), "1 = 0");
}

#[test]
fn in_subquery_keeps_inner_parameters_only() {
    let column: SQL<'_, Value> = id().to_sql();
    let filter: SQL<'_, Value> = like(name(), "%my%");
    let inner: SQL<'_, Value> = SQL::raw("SELECT")
        .append(column)
        .append(SQL::raw("FROM \"shopping_order\" WHERE"))
        .append(filter);
    let (text, params) = render(in_subquery(id(), inner));
    assert_eq!(
        text,
        r#""shopping_order"."id" IN (SELECT "shopping_order"."id" FROM "shopping_order" WHERE "shopping_order"."name" LIKE ?)"#
    );
    assert_eq!(params, vec![Value::Text("%my%".into())]);
}

#[test]
fn null_checks() {
    let sql: SQL<'_, Value> = is_not_null(name());
    assert_eq!(sql.sql(), r#""shopping_order"."name" IS NOT NULL"#);
}

#[test]
fn order_terms_join_with_commas() {
    let terms: [SQL<'_, Value>; 2] = [OrderBy::desc(id()), OrderBy::asc(name())];
    let joined: SQL<'_, Value> = terms.to_sql();
    assert_eq!(
        joined.sql(),
        r#""shopping_order"."id" DESC, "shopping_order"."name" ASC"#
    );
}

#[test]
fn table_without_foreign_keys_has_no_dependencies() {
    assert!(TABLE.dependencies().is_empty());
    assert_eq!(TABLE.columns().len(), 2);
}
