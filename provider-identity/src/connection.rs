//! Mesh connection documents.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{IdentityError, IdentityResult};

const DEFAULT_INTERVAL: u64 = 9000;
const DEFAULT_KEY_LENGTH: usize = 43;
const DEFAULT_OTP_LENGTH: usize = 32;
const DEFAULT_MAX_MESSAGE_SIZE: usize = 20 << 20;

/// OTP seeds are base32 secrets.
const OTP_SECRET_LEN: usize = 32;
const BASE32_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Parameters controlling how new connection documents are generated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// OTP rotation interval in seconds.
    pub interval: u64,
    /// Length of the random room, rendezvous and mDNS names.
    pub key_length: usize,
    /// Length of the keys derived from each OTP seed.
    pub otp_length: usize,
    /// Largest message the mesh accepts, in bytes.
    pub max_message_size: usize,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            key_length: DEFAULT_KEY_LENGTH,
            otp_length: DEFAULT_OTP_LENGTH,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl ConnectionSettings {
    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidSettings`] for any zero value.
    pub fn validate(&self) -> IdentityResult<()> {
        if self.interval == 0 {
            return Err(IdentityError::InvalidSettings("interval must be > 0"));
        }
        if self.key_length == 0 {
            return Err(IdentityError::InvalidSettings("key_length must be > 0"));
        }
        if self.otp_length == 0 {
            return Err(IdentityError::InvalidSettings("otp_length must be > 0"));
        }
        if self.max_message_size == 0 {
            return Err(IdentityError::InvalidSettings("max_message_size must be > 0"));
        }
        Ok(())
    }
}

/// Settings of a single OTP channel.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OtpConfig {
    /// Rotation interval in seconds.
    pub interval: u64,
    /// Base32 seed.
    pub key: String,
    /// Length of the derived key.
    pub length: usize,
}

/// OTP channels of a connection.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Otp {
    /// Seed used to rotate DHT discovery keys.
    pub dht: OtpConfig,
    /// Seed used to rotate message encryption keys.
    pub crypto: OtpConfig,
}

/// Everything a node needs to join a mesh network.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConnectionData {
    /// OTP channels.
    pub otp: Otp,
    /// Pubsub room name.
    #[serde(rename = "room")]
    pub room_name: String,
    /// DHT rendezvous string.
    pub rendezvous: String,
    /// mDNS discovery service tag.
    pub mdns: String,
    /// Largest message the mesh accepts, in bytes.
    pub max_message_size: usize,
}

impl ConnectionData {
    /// Generates a fresh connection using the thread-local RNG.
    #[must_use]
    pub fn generate(settings: &ConnectionSettings) -> Self {
        Self::generate_with(settings, &mut rand::thread_rng())
    }

    /// Generates a fresh connection drawing randomness from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(settings: &ConnectionSettings, rng: &mut R) -> Self {
        let otp = |rng: &mut R| OtpConfig {
            interval: settings.interval,
            key: random_string(rng, BASE32_ALPHABET, OTP_SECRET_LEN),
            length: settings.otp_length,
        };

        Self {
            otp: Otp {
                dht: otp(rng),
                crypto: otp(rng),
            },
            room_name: random_string(rng, LETTERS, settings.key_length),
            rendezvous: random_string(rng, LETTERS, settings.key_length),
            mdns: random_string(rng, LETTERS, settings.key_length),
            max_message_size: settings.max_message_size,
        }
    }

    /// Encodes the connection as a compact token: base64 of its YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Yaml`] if the document cannot be serialized.
    pub fn to_token(&self) -> IdentityResult<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(STANDARD.encode(yaml))
    }

    /// Decodes a token produced by [`to_token`](Self::to_token).
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Base64`] or [`IdentityError::Yaml`] when the
    /// token is malformed.
    pub fn from_token(token: &str) -> IdentityResult<Self> {
        let yaml = STANDARD.decode(token.trim())?;
        Ok(serde_yaml::from_slice(&yaml)?)
    }
}

fn random_string<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}
