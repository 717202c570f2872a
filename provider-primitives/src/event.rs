//! Bus event types.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MAX_NAME_LEN: usize = 128;

/// Name of an event dispatched by the bus, e.g. `agent.interactive-install`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(Cow<'static, str>);

impl EventType {
    /// Sent once when the agent starts.
    pub const BOOTSTRAP: Self = Self::from_static("agent.bootstrap");
    /// Sent after an unattended install completed.
    pub const INSTALL: Self = Self::from_static("agent.install");
    /// Asks providers for the pairing challenge shown during install.
    pub const INSTALL_CHALLENGE: Self = Self::from_static("agent.install.challenge");
    /// Asks providers which extra questions the interactive installer should pose.
    pub const INTERACTIVE_INSTALL: Self = Self::from_static("agent.interactive-install");

    /// Creates an event name after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEventName`] if the name is empty, too long, or
    /// contains characters outside lowercase alphanumerics, `.`, `-` and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(Cow::Owned(name)))
    }

    const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Returns the event name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidEventName {
            name: String::new(),
            reason: "name cannot be empty".into(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidEventName {
            name: name.into(),
            reason: format!("name length must be <= {MAX_NAME_LEN}"),
        });
    }

    if !name
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_' | '.'))
    {
        return Err(Error::InvalidEventName {
            name: name.into(),
            reason: "name must contain lowercase alphanumeric, dash, underscore, or dot".into(),
        });
    }

    Ok(())
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Event as delivered by the bus.
///
/// Payloads too large to inline are written to a file by the bus, in which
/// case `file` names it and `data` is empty.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name.
    pub name: EventType,
    /// Inline payload.
    #[serde(default)]
    pub data: String,
    /// Path of a file holding the payload, empty when inlined.
    #[serde(default)]
    pub file: String,
}

impl Event {
    /// Creates an event without payload.
    #[must_use]
    pub fn new(name: EventType) -> Self {
        Self {
            name,
            data: String::new(),
            file: String::new(),
        }
    }

    /// Sets the inline payload.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Points the payload at a file.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Returns the payload file, if the bus moved the payload out of line.
    #[must_use]
    pub fn payload_file(&self) -> Option<&Path> {
        (!self.file.is_empty()).then(|| Path::new(self.file.as_str()))
    }
}
