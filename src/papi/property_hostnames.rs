//! Property version hostnames

use super::Papi;
use crate::error::Result;
use crate::session::{CallOptions, Endpoint};
use crate::validation::{ensure_valid, Validate, ValidationError, Validator};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const PROPERTIES_PATH: &str = "/papi/v1/properties";

const GET_PROPERTY_VERSION_HOSTNAMES: &str = "fetching hostnames for property version";
const UPDATE_PROPERTY_VERSION_HOSTNAMES: &str = "updating hostnames for property version";

/// A hostname mapped onto an edge hostname
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hostname {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cname_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub edge_hostname_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cname_from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cname_to: String,
}

/// Wrapper matching the `{"items": [...]}` JSON shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostnameItems {
    #[serde(default)]
    pub items: Vec<Hostname>,
}

/// Parameters for listing the hostnames of a property version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPropertyVersionHostnamesRequest {
    pub property_id: String,
    pub property_version: i32,
    pub contract_id: String,
    pub group_id: String,
    pub validate_hostnames: bool,
}

/// Parameters for replacing the hostnames of a property version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePropertyVersionHostnamesRequest {
    pub property_id: String,
    pub property_version: i32,
    pub contract_id: String,
    pub group_id: String,
    pub validate_hostnames: bool,
    /// Sent as the request body; at least one item is required
    pub hostnames: HostnameItems,
}

/// Hostnames of one property version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyVersionHostnames {
    pub account_id: String,
    pub contract_id: String,
    pub group_id: String,
    pub property_id: String,
    pub property_version: i32,
    pub etag: String,
    pub hostnames: HostnameItems,
}

pub type GetPropertyVersionHostnamesResponse = PropertyVersionHostnames;
pub type UpdatePropertyVersionHostnamesResponse = PropertyVersionHostnames;

impl Validate for GetPropertyVersionHostnamesRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Validator::new()
            .required("PropertyID", &self.property_id)
            .required("PropertyVersion", &self.property_version)
            .finish()
    }
}

impl Validate for UpdatePropertyVersionHostnamesRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Validator::new()
            .required("PropertyID", &self.property_id)
            .required("PropertyVersion", &self.property_version)
            .required("Hostnames.Items", &self.hostnames.items)
            .finish()
    }
}

/// `/papi/v1/properties/{id}/versions/{version}/hostnames` with its fixed query order
fn hostnames_endpoint(
    method: Method,
    property_id: &str,
    property_version: i32,
    contract_id: &str,
    group_id: &str,
    validate_hostnames: bool,
) -> Endpoint {
    Endpoint::new(method, PROPERTIES_PATH)
        .segment(property_id)
        .segment("versions")
        .segment(property_version)
        .segment("hostnames")
        .query("contractId", contract_id)
        .query("groupId", group_id)
        .query("validateHostnames", validate_hostnames)
        .not_found_as_path()
}

impl Papi {
    /// List the hostnames of a property version
    pub async fn get_property_version_hostnames(
        &self,
        params: &GetPropertyVersionHostnamesRequest,
        opts: &CallOptions,
    ) -> Result<GetPropertyVersionHostnamesResponse> {
        ensure_valid(GET_PROPERTY_VERSION_HOSTNAMES, params)?;

        let endpoint = hostnames_endpoint(
            Method::GET,
            &params.property_id,
            params.property_version,
            &params.contract_id,
            &params.group_id,
            params.validate_hostnames,
        );

        self.session
            .exec(GET_PROPERTY_VERSION_HOSTNAMES, &endpoint, None::<&()>, opts)
            .await
    }

    /// Replace the hostnames of a property version
    pub async fn update_property_version_hostnames(
        &self,
        params: &UpdatePropertyVersionHostnamesRequest,
        opts: &CallOptions,
    ) -> Result<UpdatePropertyVersionHostnamesResponse> {
        ensure_valid(UPDATE_PROPERTY_VERSION_HOSTNAMES, params)?;

        let endpoint = hostnames_endpoint(
            Method::PUT,
            &params.property_id,
            params.property_version,
            &params.contract_id,
            &params.group_id,
            params.validate_hostnames,
        );

        self.session
            .exec(
                UPDATE_PROPERTY_VERSION_HOSTNAMES,
                &endpoint,
                Some(&params.hostnames.items),
                opts,
            )
            .await
    }
}
