//! Configuration version clones

use super::AppSec;
use crate::error::Result;
use crate::session::{CallOptions, Endpoint};
use crate::validation::{ensure_valid, Validate, ValidationError, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const CONFIGS_PATH: &str = "/appsec/v1/configs";

const GET_CONFIGURATION_CLONE: &str = "getting configuration clone";
const CREATE_CONFIGURATION_CLONE: &str = "creating configuration clone";

/// Parameters for reading one configuration version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetConfigurationCloneRequest {
    pub config_id: i64,
    pub version: i32,
}

/// Parameters for cloning a configuration version into a new version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfigurationCloneRequest {
    /// Path parameter; not part of the body
    #[serde(skip)]
    pub config_id: i64,
    pub create_from_version: i32,
    pub rule_update: bool,
}

/// Activation status on one network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationState {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

/// A security configuration version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationClone {
    pub config_id: i64,
    pub config_name: String,
    pub version: i32,
    pub version_notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    pub created_by: String,
    pub based_on: i32,
    pub production: ActivationState,
    pub staging: ActivationState,
}

pub type GetConfigurationCloneResponse = ConfigurationClone;
pub type CreateConfigurationCloneResponse = ConfigurationClone;

impl Validate for GetConfigurationCloneRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Validator::new()
            .required("ConfigID", &self.config_id)
            .required("Version", &self.version)
            .finish()
    }
}

impl Validate for CreateConfigurationCloneRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Validator::new()
            .required("ConfigID", &self.config_id)
            .required("CreateFromVersion", &self.create_from_version)
            .finish()
    }
}

impl AppSec {
    /// Read one version of a security configuration
    pub async fn get_configuration_clone(
        &self,
        params: &GetConfigurationCloneRequest,
        opts: &CallOptions,
    ) -> Result<GetConfigurationCloneResponse> {
        ensure_valid(GET_CONFIGURATION_CLONE, params)?;

        let endpoint = Endpoint::get(CONFIGS_PATH)
            .segment(params.config_id)
            .segment("versions")
            .segment(params.version);

        self.session
            .exec(GET_CONFIGURATION_CLONE, &endpoint, None::<&()>, opts)
            .await
    }

    /// Create a new configuration version cloned from an existing one
    pub async fn create_configuration_clone(
        &self,
        params: &CreateConfigurationCloneRequest,
        opts: &CallOptions,
    ) -> Result<CreateConfigurationCloneResponse> {
        ensure_valid(CREATE_CONFIGURATION_CLONE, params)?;

        let endpoint = Endpoint::post(CONFIGS_PATH)
            .segment(params.config_id)
            .segment("versions");

        self.session
            .exec(CREATE_CONFIGURATION_CLONE, &endpoint, Some(params), opts)
            .await
    }
}
