//! Shapes shared by every storage write operation

use super::storage_group::StorageGroup;
use serde::{Deserialize, Serialize};

/// Hypermedia link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Returned on create, update and delete for all entity types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub passing_validation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Server timestamp, passed through as sent
    pub propagation_status_date: Option<String>,
}

/// Envelope of a storage group write
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageGroupResponse {
    pub status: Option<ResponseStatus>,
    pub resource: Option<StorageGroup>,
}
