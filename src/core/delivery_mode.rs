use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::error::DeliveryModeError;
use crate::protocol::{JMS_NON_PERSISTENT, JMS_PERSISTENT};

/// JMS delivery mode — whether the broker keeps a message across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMode {
    /// Logged to stable storage; survives a broker restart (JMS default).
    #[default]
    Persistent,
    /// Held in memory only; may be lost on broker failure.
    NonPersistent,
}

impl DeliveryMode {
    /// Every variant, in declaration order.
    pub const ALL: [DeliveryMode; 2] = [DeliveryMode::Persistent, DeliveryMode::NonPersistent];

    /// Value carried in the `JMSDeliveryMode` header.
    #[inline]
    pub const fn jms_code(self) -> i32 {
        match self {
            DeliveryMode::Persistent => JMS_PERSISTENT,
            DeliveryMode::NonPersistent => JMS_NON_PERSISTENT,
        }
    }

    /// Canonical upper-case name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeliveryMode::Persistent => "PERSISTENT",
            DeliveryMode::NonPersistent => "NON_PERSISTENT",
        }
    }

    #[inline]
    pub const fn is_persistent(self) -> bool {
        matches!(self, DeliveryMode::Persistent)
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMode {
    type Err = DeliveryModeError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        DeliveryMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| DeliveryModeError::UnknownName(s.to_string()))
    }
}

impl TryFrom<i32> for DeliveryMode {
    type Error = DeliveryModeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            JMS_PERSISTENT => Ok(DeliveryMode::Persistent),
            JMS_NON_PERSISTENT => Ok(DeliveryMode::NonPersistent),
            other => Err(DeliveryModeError::UnknownCode(other)),
        }
    }
}

impl From<DeliveryMode> for i32 {
    fn from(mode: DeliveryMode) -> Self {
        mode.jms_code()
    }
}

impl<'de> Deserialize<'de> for DeliveryMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
