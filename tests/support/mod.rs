//! Shared fixtures for integration tests.

#![allow(dead_code)]

// std
use std::sync::atomic::{AtomicUsize, Ordering};
// self
use client_registrar::{
	client::{ClientId, ClientName},
	registrar::ClientRegistration,
	secret::{ProtectError, SecretProtector},
};

/// base64(SHA-256("hunter2")).
pub const HUNTER2_HASH: &str = "9S+9MrKzuG/4jvbEkGKChfSCrxXdyylUH5S89Saj9sc=";

/// XOR key applied by [`XorProtector`].
pub const XOR_KEY: u8 = 0x5A;

/// Deterministic stand-in for envelope encryption that counts its invocations.
#[derive(Debug, Default)]
pub struct XorProtector {
	calls: AtomicUsize,
}
impl XorProtector {
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl SecretProtector for XorProtector {
	fn protect(&self, secret: &[u8]) -> Result<Vec<u8>, ProtectError> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Ok(secret.iter().map(|b| b ^ XOR_KEY).collect())
	}
}

pub fn client_id(value: &str) -> ClientId {
	ClientId::new(value).expect("Client id fixture should be valid.")
}

pub fn client_name(value: &str) -> ClientName {
	ClientName::new(value).expect("Client name fixture should be valid.")
}

pub fn registration(id: &str, name: &str) -> ClientRegistration {
	ClientRegistration::new(client_id(id), client_name(name))
}
