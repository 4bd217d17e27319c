//! Client secret validation, password hashing, and protection.
//!
//! `processor` owns the pipeline: [`SecretProcessor::validate`] rejects unusable secret
//! settings and reports [`Diagnostic`]s, then [`SecretProcessor::process`] derives the
//! stored value (literal secret or SHA-256 password digest) and runs it through an optional
//! [`SecretProtector`]. `protector` defines that capability as a narrow trait so envelope
//! encryption, KMS wrapping, or test doubles can be plugged in without this crate knowing
//! about them.

pub mod diagnostic;
pub mod processor;
pub mod protector;

pub use diagnostic::*;
pub use processor::*;
pub use protector::*;
