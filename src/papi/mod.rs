//! Property Manager API
//!
//! Client for the `/papi/v1` family. Lookups on this family report a 404 as
//! `resource not found, <path>` rather than a decoded [`ApiError`](crate::error::ApiError).

mod property_hostnames;

pub use property_hostnames::{
    GetPropertyVersionHostnamesRequest, GetPropertyVersionHostnamesResponse, Hostname,
    HostnameItems, PropertyVersionHostnames, UpdatePropertyVersionHostnamesRequest,
    UpdatePropertyVersionHostnamesResponse,
};

use crate::session::Session;

/// Property configuration client
#[derive(Debug, Clone)]
pub struct Papi {
    session: Session,
}

impl Papi {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
