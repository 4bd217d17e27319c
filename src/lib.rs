//! Validated, secret-protected OAuth/OIDC client descriptors built from administrator input.
//!
//! The crate turns a [`registrar::ClientRegistration`] into a
//! [`client::ClientDescriptor`] that is safe to hand to a store: client secrets are
//! format-checked, passwords are hashed, and the result is optionally passed through a
//! caller-supplied [`secret::SecretProtector`] before it lands on the descriptor.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod error;
pub mod obs;
pub mod registrar;
pub mod secret;
pub mod store;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
}

pub use url;
#[cfg(test)] use color_eyre as _;
