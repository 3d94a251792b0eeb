use std::{fmt::Display, str::FromStr};

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::err::{ValueError, ValueResult};

// Type codes from lua.h that have no counterpart in LuaType.
pub const LUA_TNONE: i32 = -1;
pub const LUA_TUSERDATA: i32 = 7;
pub const LUA_TTHREAD: i32 = 8;

/// The kind of a lua value.
///
/// Discriminants are the `LUA_T*` codes of the reference interpreter's C API,
/// so a tag can be handed across the embedding boundary as a plain integer.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum LuaType {
    Nil = 0,
    Boolean = 1,
    Number = 3,
    String = 4,
    Function = 6,
    Table = 5,
    LightUserData = 2,
}

impl LuaType {
    pub const ALL: [LuaType; 7] = [
        LuaType::Nil,
        LuaType::Boolean,
        LuaType::Number,
        LuaType::String,
        LuaType::Function,
        LuaType::Table,
        LuaType::LightUserData,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LuaType::Nil => "nil",
            LuaType::Boolean => "boolean",
            LuaType::Number => "number",
            LuaType::String => "string",
            LuaType::Function => "function",
            LuaType::Table => "table",
            LuaType::LightUserData => "lightuserdata",
        }
    }

    #[inline]
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(code: i32) -> ValueResult<Self> {
        if let Some(ty) = Self::from_i32(code) {
            return Ok(ty);
        }

        let err = match code {
            LUA_TNONE | LUA_TUSERDATA | LUA_TTHREAD => ValueError::UnsupportedRawType(code),
            _ => ValueError::InvalidRawType(code),
        };
        log::debug!("rejected raw lua type code {code}: {err}");
        Err(err)
    }

    pub const fn direction(self) -> Direction {
        match self {
            LuaType::Nil | LuaType::Boolean | LuaType::Number | LuaType::String => {
                Direction::InOut
            }
            // Placeholders only. The host can observe these but has nothing to hand in.
            LuaType::Function | LuaType::Table => Direction::Out,
            LuaType::LightUserData => Direction::In,
        }
    }
}

impl Display for LuaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LuaType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| ValueError::UnknownTypeName(s.to_string()))
    }
}

/// Which way a kind of value may cross the embedding boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// host -> interpreter only
    In,
    /// interpreter -> host only
    Out,
    InOut,
}

impl Direction {
    pub const fn is_input(self) -> bool {
        matches!(self, Direction::In | Direction::InOut)
    }

    pub const fn is_output(self) -> bool {
        matches!(self, Direction::Out | Direction::InOut)
    }
}
