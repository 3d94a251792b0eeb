use std::{fmt::Display, ops::Deref};

use crate::{marker::LuaKind, ty::LuaType};

/// Owned text. Always an independent copy of whatever it was built from.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LuaString(String);

impl LuaString {
    #[inline]
    pub fn new(s: &str) -> Self {
        Self(s.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl LuaKind for LuaString {
    const TYPE: LuaType = LuaType::String;
}

impl Deref for LuaString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for LuaString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LuaString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for LuaString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
