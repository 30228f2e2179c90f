//! Trojan client passwords.
//!
//! A Trojan password is the user's UUID and doubles as the credential for the
//! proxy, so the value stays out of logs and is wiped when the client list is
//! dropped. The engine configuration is the only place it is written out, via
//! [`RedactedPassword::serialize_exposed`].

use crate::{ErrorLocation, RedactError};

use std::fmt;

use serde::ser::Error as SerError;
use serde::{Serialize, Serializer};
use zeroize::Zeroize;

const REDACTED: &str = "[REDACTED]";

#[derive(Clone, PartialEq, Eq)]
pub struct RedactedPassword(String);

impl RedactedPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Plain value, for handing to the engine only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `serialize_with` target for the engine's `clients[].password` field.
    pub fn serialize_exposed<S: Serializer>(password: &Self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(password.expose())
    }
}

impl From<&str> for RedactedPassword {
    fn from(password: &str) -> Self {
        Self::new(password)
    }
}

impl fmt::Debug for RedactedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RedactedPassword").field(&REDACTED).finish()
    }
}

impl fmt::Display for RedactedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Zeroize for RedactedPassword {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for RedactedPassword {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Plain `Serialize` is refused; fields must opt in with `serialize_exposed`.
impl Serialize for RedactedPassword {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("Trojan password needs serialize_exposed"),
            location: ErrorLocation::here(),
        }))
    }
}
