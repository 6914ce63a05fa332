//! FCM device group client
//!
//! A client for Firebase Cloud Messaging's legacy device group management
//! endpoint: create a named group of registration tokens, add devices to it,
//! remove devices from it. FCM answers with the group's opaque notification
//! key, which message sends can later target.
//!
//! ```no_run
//! use fcm_groups::{GroupClient, GroupConfig};
//!
//! # async fn run() -> Result<(), fcm_groups::GroupError> {
//! let client = GroupClient::new(GroupConfig::new("project api key", "project ID"));
//! let key = client
//!     .create_device_group("appUser-Chris", Some(vec!["token-1".to_string()]))
//!     .await?;
//! println!("notification key: {key}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::{GroupClient, DEVICE_GROUP_ENDPOINT};
pub use config::GroupConfig;
pub use errors::GroupError;
pub use models::GroupOperation;
