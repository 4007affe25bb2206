/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Zoom meeting role carried in join signatures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role a participant joins with. Serialized as the integer Zoom expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MeetingRole {
    Attendee = 0,
    Host = 1,
}

impl MeetingRole {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Returned for any role value other than 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRole(pub String);

impl fmt::Display for InvalidRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid meeting role '{}', expected 0 or 1", self.0)
    }
}

impl std::error::Error for InvalidRole {}

impl TryFrom<u8> for MeetingRole {
    type Error = InvalidRole;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Attendee),
            1 => Ok(Self::Host),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

impl From<MeetingRole> for u8 {
    fn from(role: MeetingRole) -> Self {
        role.as_u8()
    }
}

impl FromStr for MeetingRole {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Attendee),
            "1" => Ok(Self::Host),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for MeetingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
