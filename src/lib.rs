//! Typed client for edge platform REST APIs
//!
//! Each family client wraps one group of endpoints and shares a [`Session`]:
//!
//! - [`appsec`] - Application security configuration clones
//! - [`papi`] - Property version hostnames
//! - [`storage`] - NetStorage storage groups
//!
//! Every operation validates its request, builds a deterministic path, sends
//! exactly one request through the session and decodes either the typed
//! response or an [`ApiError`].
//!
//! # Example
//!
//! ```ignore
//! use edgegrid_sdk::{CallOptions, ClientConfig, Session};
//! use edgegrid_sdk::papi::{GetPropertyVersionHostnamesRequest, Papi};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::new(&ClientConfig::new("https://akab-example.luna.example.net"))?;
//!     let papi = Papi::new(session);
//!     let hostnames = papi
//!         .get_property_version_hostnames(
//!             &GetPropertyVersionHostnamesRequest {
//!                 property_id: "prp_175780".into(),
//!                 property_version: 3,
//!                 ..Default::default()
//!             },
//!             &CallOptions::default(),
//!         )
//!         .await?;
//!     println!("{} hostnames", hostnames.hostnames.items.len());
//!     Ok(())
//! }
//! ```

pub mod appsec;
pub mod config;
pub mod error;
pub mod papi;
pub mod session;
pub mod storage;
pub mod validation;

pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ApiErrorDetail, Error, ErrorKind, Result};
pub use session::{BearerToken, CallOptions, Endpoint, RequestSigner, Session, Unsigned};
pub use validation::{Validate, ValidationError};

// Family clients are shared across tasks.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Session>;
    let _ = assert_send_sync::<appsec::AppSec>;
    let _ = assert_send_sync::<papi::Papi>;
    let _ = assert_send_sync::<storage::Storage>;
    let _ = assert_send_sync::<Error>;
};
