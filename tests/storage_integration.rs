//! Integration tests for the storage group client using wiremock

mod common;

use common::{fixture, fixture_as, forbid_requests, mock_session, received_paths};
use edgegrid_sdk::storage::{
    CreateStorageGroupRequest, DeleteStorageGroupRequest, GetStorageGroupRequest,
    ListStorageGroupsRequest, Storage, StorageGroup, StorageGroupResponse,
    UpdateStorageGroupRequest, Zone,
};
use edgegrid_sdk::{ApiError, CallOptions, ErrorKind};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn new_group() -> StorageGroup {
    StorageGroup {
        storage_group_name: "media-assets".to_string(),
        storage_group_type: "NETSTORAGE".to_string(),
        domain_prefix: "mediaassets".to_string(),
        zones: vec![Zone {
            zone_name: "europe".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// Test 200 response decodes the full storage group fixture
#[tokio::test]
async fn test_get_storage_group_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/storage/v1/storage-groups/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(fixture("storage_group.json"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let result = client
        .get_storage_group(
            &GetStorageGroupRequest {
                storage_group_id: 1,
            },
            &CallOptions::default(),
        )
        .await
        .expect("Request should succeed");

    let expected: StorageGroup = fixture_as("storage_group.json");
    assert_eq!(result, expected);
    assert_eq!(result.storage_group_id, Some(1));
    assert_eq!(result.zones.len(), 2);
    assert_eq!(result.cpcodes[0].cpcode_id, 123456);
    assert_eq!(result.estimated_usage_gb, Some(1.5));
}

/// Test 400 problem response with sub-errors compares by value
#[tokio::test]
async fn test_get_storage_group_400_validation_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/storage/v1/storage-groups/-9"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{
                "type": "validation-error",
                "title": "Validation failure",
                "instance": "6d00fc96-5431-4efa-86eb-afbb6cbdb5bc",
                "status": 400,
                "detail": "Validation failed. Please review the errors.",
                "errors": [
                    {
                        "type": "error-types/invalid-value",
                        "title": "Invalid value",
                        "detail": "Unable to find the given storage group.",
                        "field": "storageGroupId"
                    }
                ]
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let err = client
        .get_storage_group(
            &GetStorageGroupRequest {
                storage_group_id: -9,
            },
            &CallOptions::default(),
        )
        .await
        .expect_err("Request should fail");

    let want = ApiError {
        error_type: "validation-error".to_string(),
        title: "Validation failure".to_string(),
        detail: "Validation failed. Please review the errors.".to_string(),
        status_code: 400,
        ..Default::default()
    };
    assert_eq!(err, want);

    let api = err.api_error().unwrap();
    assert_eq!(api.instance.as_deref(), Some("6d00fc96-5431-4efa-86eb-afbb6cbdb5bc"));
    assert_eq!(api.errors[0].field.as_deref(), Some("storageGroupId"));
    assert_eq!(received_paths(&server).await, vec!["/storage/v1/storage-groups/-9"]);
}

/// Test a 404 on storage is a regular API error
#[tokio::test]
async fn test_get_storage_group_404_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/storage/v1/storage-groups/77"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "not-found",
            "title": "Not Found",
            "detail": "Storage group 77 does not exist",
            "status": 404
        })))
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let err = client
        .get_storage_group(
            &GetStorageGroupRequest {
                storage_group_id: 77,
            },
            &CallOptions::default(),
        )
        .await
        .expect_err("Request should fail");

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), Some(404));
}

/// Test zero ID is rejected locally
#[tokio::test]
async fn test_get_storage_group_requires_id() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let client = Storage::new(mock_session(&server));
    let err = client
        .get_storage_group(&GetStorageGroupRequest::default(), &CallOptions::default())
        .await
        .expect_err("Validation should fail");

    assert!(err.is_validation());
    assert!(err.to_string().contains("StorageGroupID"));
    server.verify().await;
}

/// Test list without a filter omits the query string
#[tokio::test]
async fn test_list_storage_groups() {
    let server = MockServer::start().await;

    let group: serde_json::Value = serde_json::from_str(&fixture("storage_group.json")).unwrap();
    Mock::given(method("GET"))
        .and(path("/storage/v1/storage-groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [group] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let result = client
        .list_storage_groups(&ListStorageGroupsRequest::default(), &CallOptions::default())
        .await
        .expect("Request should succeed");

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].storage_group_name, "media-assets");
    assert_eq!(received_paths(&server).await, vec!["/storage/v1/storage-groups"]);
}

/// Test list with a purpose filter
#[tokio::test]
async fn test_list_storage_groups_with_purpose() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/storage/v1/storage-groups"))
        .and(query_param("storageGroupPurpose", "NETSTORAGE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let result = client
        .list_storage_groups(
            &ListStorageGroupsRequest {
                storage_group_purpose: Some("NETSTORAGE".to_string()),
            },
            &CallOptions::default(),
        )
        .await
        .expect("Request should succeed");

    assert!(result.items.is_empty());
}

/// Test create posts the group and decodes the status envelope
#[tokio::test]
async fn test_create_storage_group() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/storage/v1/storage-groups"))
        .and(body_partial_json(json!({
            "storageGroupName": "media-assets",
            "storageGroupType": "NETSTORAGE",
            "domainPrefix": "mediaassets",
            "zones": [{"zoneName": "europe"}]
        })))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_raw(fixture("storage_group_response.json"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let result = client
        .create_storage_group(
            &CreateStorageGroupRequest {
                storage_group: new_group(),
            },
            &CallOptions::default(),
        )
        .await
        .expect("Request should succeed");

    let expected: StorageGroupResponse = fixture_as("storage_group_response.json");
    assert_eq!(result, expected);

    let status = result.status.unwrap();
    assert_eq!(status.change_id.as_deref(), Some("chg_4c9b5d1e"));
    assert!(status.passing_validation);
    assert_eq!(
        status.propagation_status_date.as_deref(),
        Some("2019-04-11T21:05:55Z")
    );
    assert_eq!(result.resource.unwrap().storage_group_id, Some(1));
}

/// Test create reports every missing field at once
#[tokio::test]
async fn test_create_storage_group_validation() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let client = Storage::new(mock_session(&server));
    let err = client
        .create_storage_group(&CreateStorageGroupRequest::default(), &CallOptions::default())
        .await
        .expect_err("Validation should fail");

    let message = err.to_string();
    for field in [
        "StorageGroupName",
        "StorageGroupType",
        "DomainPrefix",
        "Zones",
    ] {
        assert!(message.contains(field), "want {field}; got: {message}");
    }
    server.verify().await;
}

/// Test update puts to the group path
#[tokio::test]
async fn test_update_storage_group() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/storage/v1/storage-groups/1"))
        .and(body_partial_json(json!({"storageGroupName": "media-assets"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(fixture("storage_group_response.json"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let result = client
        .update_storage_group(
            &UpdateStorageGroupRequest {
                storage_group_id: 1,
                storage_group: new_group(),
            },
            &CallOptions::default(),
        )
        .await
        .expect("Request should succeed");

    assert!(result.status.is_some());
}

/// Test update requires the ID in addition to the name
#[tokio::test]
async fn test_update_storage_group_validation() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let client = Storage::new(mock_session(&server));
    let err = client
        .update_storage_group(
            &UpdateStorageGroupRequest {
                storage_group_id: 0,
                storage_group: new_group(),
            },
            &CallOptions::default(),
        )
        .await
        .expect_err("Validation should fail");

    assert_eq!(err.validation_error().unwrap().fields(), vec!["StorageGroupID"]);
    server.verify().await;
}

/// Test delete sends no body and decodes the status envelope
#[tokio::test]
async fn test_delete_storage_group() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/storage/v1/storage-groups/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {"message": "Storage group deleted", "propagationStatus": "PENDING"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let result = client
        .delete_storage_group(
            &DeleteStorageGroupRequest {
                storage_group_id: 1,
            },
            &CallOptions::default(),
        )
        .await
        .expect("Request should succeed");

    assert!(result.resource.is_none());
    assert_eq!(
        result.status.unwrap().message.as_deref(),
        Some("Storage group deleted")
    );

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

/// Test delete treats an empty 204 reply as success
#[tokio::test]
async fn test_delete_storage_group_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/storage/v1/storage-groups/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let result = client
        .delete_storage_group(
            &DeleteStorageGroupRequest {
                storage_group_id: 1,
            },
            &CallOptions::default(),
        )
        .await
        .expect("Request should succeed");

    assert_eq!(result, StorageGroupResponse::default());
}

/// Test timestamps that are not RFC 3339 still decode
#[tokio::test]
async fn test_update_storage_group_free_form_status_date() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/storage/v1/storage-groups/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {
                "propagationStatus": "PENDING",
                "propagationStatusDate": "2019-04-11 21:05:55 GMT"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Storage::new(mock_session(&server));
    let result = client
        .update_storage_group(
            &UpdateStorageGroupRequest {
                storage_group_id: 1,
                storage_group: new_group(),
            },
            &CallOptions::default(),
        )
        .await
        .expect("Request should succeed");

    assert_eq!(
        result.status.unwrap().propagation_status_date.as_deref(),
        Some("2019-04-11 21:05:55 GMT")
    );
}
