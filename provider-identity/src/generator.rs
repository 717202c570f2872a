//! Identity token generators.

use std::sync::Arc;

use tracing::trace;

use crate::{ConnectionData, ConnectionSettings, IdentityResult};

/// Capability producing a fresh connection identity token on every call.
pub trait IdentityGenerator: Send + Sync {
    /// Generates a new identity and returns its compact text encoding.
    ///
    /// # Errors
    ///
    /// Implementations backed by fallible sources report failures through
    /// [`IdentityError`](crate::IdentityError).
    fn generate(&self) -> IdentityResult<String>;
}

impl<T: IdentityGenerator + ?Sized> IdentityGenerator for Arc<T> {
    fn generate(&self) -> IdentityResult<String> {
        (**self).generate()
    }
}

/// Generates random mesh connections.
#[derive(Clone, Debug, Default)]
pub struct MeshIdentityGenerator {
    settings: ConnectionSettings,
}

impl MeshIdentityGenerator {
    /// Creates a generator using `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidSettings`](crate::IdentityError::InvalidSettings)
    /// when the settings fail validation.
    pub fn new(settings: ConnectionSettings) -> IdentityResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Returns the settings used for generation.
    #[must_use]
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }
}

impl IdentityGenerator for MeshIdentityGenerator {
    fn generate(&self) -> IdentityResult<String> {
        let connection = ConnectionData::generate(&self.settings);
        trace!(room = %connection.room_name, "generated mesh connection");
        connection.to_token()
    }
}

/// Generator that always returns the same token.
#[derive(Clone, Debug)]
pub struct FixedIdentity {
    token: String,
}

impl FixedIdentity {
    /// Creates a generator returning `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl IdentityGenerator for FixedIdentity {
    fn generate(&self) -> IdentityResult<String> {
        Ok(self.token.clone())
    }
}
