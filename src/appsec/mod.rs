//! Application Security API
//!
//! Client for the `/appsec/v1` family. Only configuration version clones are
//! covered.

mod configuration_clone;

pub use configuration_clone::{
    ActivationState, ConfigurationClone, CreateConfigurationCloneRequest,
    CreateConfigurationCloneResponse, GetConfigurationCloneRequest, GetConfigurationCloneResponse,
};

use crate::session::Session;

/// Application security configuration client
#[derive(Debug, Clone)]
pub struct AppSec {
    session: Session,
}

impl AppSec {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
