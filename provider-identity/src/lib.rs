//! Connection identity generation for the mesh network.
//!
//! A connection identity is the shared secret material nodes need to find
//! each other: OTP seeds for the DHT and the crypto channel plus randomized
//! room, rendezvous and mDNS names. It travels as a compact token, the base64
//! encoding of its YAML document.

#![warn(missing_docs, clippy::pedantic)]

mod connection;
mod error;
mod generator;

/// Connection documents and the settings used to generate them.
pub use connection::{ConnectionData, ConnectionSettings, Otp, OtpConfig};
/// Error type for identity generation.
pub use error::{IdentityError, IdentityResult};
/// Token generator capability and its implementations.
pub use generator::{FixedIdentity, IdentityGenerator, MeshIdentityGenerator};
