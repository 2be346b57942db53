//! NetStorage Configuration API
//!
//! Client for the `/storage/v1` family: storage group management.

mod common;
mod storage_group;

pub use common::{Link, ResponseStatus, StorageGroupResponse};
pub use storage_group::{
    CpCode, CreateStorageGroupRequest, DeleteStorageGroupRequest, GetStorageGroupRequest,
    ListStorageGroupsRequest, ListStorageGroupsResponse, PropagationStatus, StorageGroup,
    UpdateStorageGroupRequest, Zone,
};

use crate::session::Session;

/// Storage group client
#[derive(Debug, Clone)]
pub struct Storage {
    session: Session,
}

impl Storage {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
