//! Storage groups

use super::common::{Link, StorageGroupResponse};
use super::Storage;
use crate::error::Result;
use crate::session::{CallOptions, Endpoint};
use crate::validation::{ensure_valid, Validate, ValidationError, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const STORAGE_GROUPS_PATH: &str = "/storage/v1/storage-groups";

const LIST_STORAGE_GROUPS: &str = "listing storage groups";
const GET_STORAGE_GROUP: &str = "fetching storage group";
const CREATE_STORAGE_GROUP: &str = "creating storage group";
const UPDATE_STORAGE_GROUP: &str = "updating storage group";
const DELETE_STORAGE_GROUP: &str = "deleting storage group";

/// CP code attached to a storage group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CpCode {
    pub cpcode_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_security: Option<String>,
    pub use_ssl: bool,
    pub serve_from_zip: bool,
    pub send_hash: bool,
    pub quick_delete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_files: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changes_propagated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_uploader_upload_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_type: Option<String>,
}

/// Replication zone of a storage group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Zone {
    pub zone_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_capacity_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_upload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_download: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// Propagation state of the last configuration change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropagationStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_time: Option<DateTime<Utc>>,
}

/// A NetStorage storage group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageGroup {
    /// Assigned by the server; absent on create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_group_id: Option<i64>,
    pub storage_group_name: String,
    pub storage_group_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_group_purpose: Option<String>,
    pub domain_prefix: String,
    pub aspera_enabled: bool,
    pub pci_enabled: bool,
    #[serde(rename = "estimatedUsageGB", skip_serializing_if = "Option::is_none")]
    pub estimated_usage_gb: Option<f64>,
    pub allow_edit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cpcodes: Vec<CpCode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<Zone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagation_status: Option<PropagationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Storage groups visible to the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListStorageGroupsResponse {
    #[serde(default)]
    pub items: Vec<StorageGroup>,
}

/// Parameters for listing storage groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStorageGroupsRequest {
    /// Sent as `storageGroupPurpose` when set
    pub storage_group_purpose: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetStorageGroupRequest {
    pub storage_group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateStorageGroupRequest {
    pub storage_group: StorageGroup,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateStorageGroupRequest {
    pub storage_group_id: i64,
    pub storage_group: StorageGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteStorageGroupRequest {
    pub storage_group_id: i64,
}

impl Validate for ListStorageGroupsRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Validator::new()
            .check(
                "StorageGroupPurpose",
                self.storage_group_purpose
                    .as_deref()
                    .map_or(true, |p| !p.is_empty()),
                "cannot be empty when set",
            )
            .finish()
    }
}

// Negative IDs are forwarded; the server rejects them with a problem body.
impl Validate for GetStorageGroupRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Validator::new()
            .required("StorageGroupID", &self.storage_group_id)
            .finish()
    }
}

impl Validate for CreateStorageGroupRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        let group = &self.storage_group;
        Validator::new()
            .required("StorageGroup.StorageGroupName", &group.storage_group_name)
            .required("StorageGroup.StorageGroupType", &group.storage_group_type)
            .required("StorageGroup.DomainPrefix", &group.domain_prefix)
            .required("StorageGroup.Zones", &group.zones)
            .finish()
    }
}

impl Validate for UpdateStorageGroupRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Validator::new()
            .required("StorageGroupID", &self.storage_group_id)
            .required(
                "StorageGroup.StorageGroupName",
                &self.storage_group.storage_group_name,
            )
            .finish()
    }
}

impl Validate for DeleteStorageGroupRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Validator::new()
            .required("StorageGroupID", &self.storage_group_id)
            .finish()
    }
}

impl Storage {
    /// List storage groups, optionally filtered by purpose
    pub async fn list_storage_groups(
        &self,
        params: &ListStorageGroupsRequest,
        opts: &CallOptions,
    ) -> Result<ListStorageGroupsResponse> {
        ensure_valid(LIST_STORAGE_GROUPS, params)?;

        let endpoint = Endpoint::get(STORAGE_GROUPS_PATH)
            .query_opt("storageGroupPurpose", params.storage_group_purpose.as_deref());

        self.session
            .exec(LIST_STORAGE_GROUPS, &endpoint, None::<&()>, opts)
            .await
    }

    /// Fetch one storage group
    pub async fn get_storage_group(
        &self,
        params: &GetStorageGroupRequest,
        opts: &CallOptions,
    ) -> Result<StorageGroup> {
        ensure_valid(GET_STORAGE_GROUP, params)?;

        let endpoint = Endpoint::get(STORAGE_GROUPS_PATH).segment(params.storage_group_id);

        self.session
            .exec(GET_STORAGE_GROUP, &endpoint, None::<&()>, opts)
            .await
    }

    /// Create a storage group
    pub async fn create_storage_group(
        &self,
        params: &CreateStorageGroupRequest,
        opts: &CallOptions,
    ) -> Result<StorageGroupResponse> {
        ensure_valid(CREATE_STORAGE_GROUP, params)?;

        let endpoint = Endpoint::post(STORAGE_GROUPS_PATH);

        self.session
            .exec(
                CREATE_STORAGE_GROUP,
                &endpoint,
                Some(&params.storage_group),
                opts,
            )
            .await
    }

    /// Replace a storage group's editable settings
    pub async fn update_storage_group(
        &self,
        params: &UpdateStorageGroupRequest,
        opts: &CallOptions,
    ) -> Result<StorageGroupResponse> {
        ensure_valid(UPDATE_STORAGE_GROUP, params)?;

        let endpoint = Endpoint::put(STORAGE_GROUPS_PATH).segment(params.storage_group_id);

        self.session
            .exec(
                UPDATE_STORAGE_GROUP,
                &endpoint,
                Some(&params.storage_group),
                opts,
            )
            .await
    }

    /// Delete a storage group
    pub async fn delete_storage_group(
        &self,
        params: &DeleteStorageGroupRequest,
        opts: &CallOptions,
    ) -> Result<StorageGroupResponse> {
        ensure_valid(DELETE_STORAGE_GROUP, params)?;

        let endpoint = Endpoint::delete(STORAGE_GROUPS_PATH).segment(params.storage_group_id);

        self.session
            .exec(DELETE_STORAGE_GROUP, &endpoint, None::<&()>, opts)
            .await
    }
}
