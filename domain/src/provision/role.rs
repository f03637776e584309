//! VRRP value objects: role, priority and virtual router ID

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Keepalived initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Master,
    Backup,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Master => "MASTER",
            Role::Backup => "BACKUP",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MASTER" => Ok(Role::Master),
            "BACKUP" => Ok(Role::Backup),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// VRRP priority, 1..=254 (255 is reserved for the address owner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (1..=254).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPriority(value.to_string()))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidPriority(s.to_string()))?;
        Priority::new(value).map_err(|_| DomainError::InvalidPriority(s.to_string()))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// VRRP virtual router ID, 1..=255. Both hosts must agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VirtualRouterId(u8);

impl VirtualRouterId {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for VirtualRouterId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(DomainError::InvalidNumber {
                key: "VIRTUAL_ROUTER_ID",
                value: s.to_string(),
                expected: "an integer between 1 and 255",
            }),
        }
    }
}

impl std::fmt::Display for VirtualRouterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
