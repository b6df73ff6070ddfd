mod common;

use criteria_demo::prelude::*;
use criteria_demo::routes::{ALL_ENTITY_COLUMNS_PATH, JOIN_PATH, SPECIFIC_COLUMNS_PATH};
use serde_json::json;

use common::{scenario_session, seeded_session};

#[test]
fn scenario_bodies_use_original_field_names() {
    let session = scenario_session();
    let router = Router::new();

    assert_eq!(
        router.dispatch(&session, Method::Get, ALL_ENTITY_COLUMNS_PATH),
        Response::ok(json!([{
            "id": 1,
            "name": "myOrder",
            "delivered": false,
            "itemList": [
                {"id": 10, "name": "A", "shoppingOrder": null},
                {"id": 11, "name": "B", "shoppingOrder": null}
            ]
        }]))
    );
    assert_eq!(
        router.dispatch(&session, Method::Get, SPECIFIC_COLUMNS_PATH),
        Response::ok(json!([[1, "myOrder"]]))
    );
    assert_eq!(
        router.dispatch(&session, Method::Get, JOIN_PATH),
        Response::ok(json!([[1, "myOrder", 10, "A"], [1, "myOrder", 11, "B"]]))
    );
}

#[test]
fn context_path_is_required_once_mounted() {
    let session = seeded_session();
    let router = Router::new().with_context_path("/orm-demo");

    let mounted = router.dispatch(&session, Method::Get, "/orm-demo/demo/with_specific_columns");
    assert_eq!(mounted.status, 200);
    assert_eq!(
        mounted.body,
        json!([[3, "my second order"], [1, "myOrder"]])
    );

    let bare = router.dispatch(&session, Method::Get, SPECIFIC_COLUMNS_PATH);
    assert_eq!(bare.status, 404);
}

#[test]
fn route_table_lists_three_get_routes() {
    let router = Router::new().with_context_path("orm-demo");
    let listed: Vec<(Method, String)> = router
        .routes()
        .iter()
        .map(|route| (route.method, router.full_path(route)))
        .collect();

    assert_eq!(
        listed,
        vec![
            (
                Method::Get,
                "/orm-demo/demo/simple_example_return_all_entity_columns".to_string()
            ),
            (Method::Get, "/orm-demo/demo/with_specific_columns".to_string()),
            (Method::Get, "/orm-demo/demo/join".to_string()),
        ]
    );
}
