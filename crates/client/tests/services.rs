use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use backoffice_client::services::{
    PermissionFlag, PermissionRow, PropositionBatchRequest, PropositionLine, RoleRightMappingRequest,
    StockItemType,
};
use backoffice_client::{ApiClient, ClientConfig, MemorySessionStore};
use backoffice_core::{CustomerId, RawMaterialId, ReadyItemId, RightId, RoleId};

fn client(server: &MockServer) -> ApiClient {
    backoffice_observability::init_for_tests();
    ApiClient::new(
        &ClientConfig::new(server.base_url()),
        Arc::new(MemorySessionStore::with_token("tok")),
    )
    .unwrap()
}

#[tokio::test]
async fn failed_envelope_on_200_yields_empty_list() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/ready-items");
            then.status(200)
                .json_body(json!({"status": "FAILED", "data": null, "message": "boom"}));
        })
        .await;

    let items = client(&server).ready_items().get_all().await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn get_by_id_unwraps_envelope_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/raw-materials/3");
            then.status(200).json_body(json!({
                "status": "SUCCESS",
                "data": {"id": 3, "name": "Cotton", "unit": "kg", "price": 120.5}
            }));
        })
        .await;

    let material = client(&server)
        .raw_materials()
        .get_by_id(RawMaterialId::new(3))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(material.name, "Cotton");
    assert_eq!(material.price, Some(120.5));
}

#[tokio::test]
async fn bare_entity_with_status_field_is_returned() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/ready-items/4");
            then.status(200)
                .json_body(json!({"id": 4, "name": "Bread", "unit": "loaf", "status": "ACTIVE"}));
        })
        .await;

    let item = client(&server)
        .ready_items()
        .get_by_id(ReadyItemId::new(4))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.id, Some(ReadyItemId::new(4)));
    assert_eq!(item.name, "Bread");
}

#[tokio::test]
async fn delete_uses_the_entity_prefix() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/org/role/delete/8");
            then.status(200).json_body(json!({"status": "SUCCESS", "message": "Deleted"}));
        })
        .await;

    client(&server).roles().delete(RoleId::new(8)).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn mapping_for_role_is_hydrated() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/org/role-right-mapping/role/5");
            then.status(200).json_body(json!({
                "data": {"roleId": 5, "rights": [{"rightId": 7, "view": true, "create": false}]}
            }));
        })
        .await;

    let mapping = client(&server)
        .role_right_mapping()
        .get_for_role(RoleId::new(5))
        .await
        .unwrap();
    assert_eq!(mapping.rows.len(), 1);
    assert_eq!(mapping.rows[0].right_id, Some(RightId::new(7)));
    assert!(mapping.rows[0].flag(PermissionFlag::View));
}

#[tokio::test]
async fn mapping_save_posts_the_whole_batch() {
    let server = MockServer::start_async().await;
    let mut row = PermissionRow::for_right(RightId::new(1));
    row.set_flag(PermissionFlag::View, true);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/org/role-right-mapping/save").json_body(json!({
                "roleId": 5,
                "rights": [{
                    "rightId": 1, "map": false, "view": true, "create": false, "update": false,
                    "delete": false, "export": false, "print": false, "approve": false,
                    "reject": false, "cancel": false
                }]
            }));
            then.status(200).json_body(json!({"status": "SUCCESS"}));
        })
        .await;

    client(&server)
        .role_right_mapping()
        .save_mapping(&RoleRightMappingRequest {
            role_id: RoleId::new(5),
            rights: vec![row],
        })
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn stock_by_item_sends_query_parameters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/billing/api/stock")
                .query_param("itemType", "READY_ITEM")
                .query_param("itemId", "4");
            then.status(200).json_body(json!({"data": [
                {"id": 1, "itemType": "READY_ITEM", "itemId": 4, "quantity": 12.0}
            ]}));
        })
        .await;

    let entries = client(&server)
        .stock()
        .get_by_item(StockItemType::ReadyItem, 4)
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(entries[0].quantity, 12.0);
}

#[tokio::test]
async fn proposition_batch_is_posted_once() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/billing/api/propositions/batch").json_body(json!({
                "readyItemId": 2,
                "propositions": [
                    {"rawMaterialId": 1, "percentage": 60.0},
                    {"rawMaterialId": 3, "percentage": 40.0}
                ]
            }));
            then.status(200).json_body(json!({"status": "SUCCESS"}));
        })
        .await;

    client(&server)
        .propositions()
        .save_batch(&PropositionBatchRequest {
            ready_item_id: ReadyItemId::new(2),
            propositions: vec![
                PropositionLine { raw_material_id: RawMaterialId::new(1), percentage: 60.0 },
                PropositionLine { raw_material_id: RawMaterialId::new(3), percentage: 40.0 },
            ],
        })
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn payments_by_customer() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/billing/api/payments/customer/9");
            then.status(200).json_body(json!([
                {"id": 1, "customerId": 9, "amount": 250.0, "paymentDate": "2026-03-01", "mode": "UPI"}
            ]));
        })
        .await;

    let payments = client(&server)
        .payments()
        .get_by_customer(CustomerId::new(9))
        .await
        .unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].mode.as_str(), "UPI");
}
