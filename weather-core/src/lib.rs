//! Core library for the `weatherwise` client.
//!
//! This crate defines:
//! - The lookup endpoint contract and its HTTP provider
//! - The view state a front end renders, with its all-or-nothing updates
//! - Configuration handling and shared domain models
//!
//! It is used by `weatherwise-cli`, but can also back other front ends.

pub mod config;
pub mod error;
pub mod info;
pub mod layout;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use error::{Capability, LookupError};
pub use layout::Layout;
pub use lookup::run_lookup;
pub use model::{ImageInfo, LookupPayload, WeatherResult};
pub use provider::{EndpointId, LookupProvider, http::HttpLookupProvider};
pub use view::{Background, ViewState};
