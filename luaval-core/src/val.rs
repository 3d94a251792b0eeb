use std::{ffi::c_void, fmt::Display};

use crate::{
    err::{ValueError, ValueResult},
    marker::{LuaFunction, LuaKind, LuaNil, LuaTable},
    num::{LuaBoolean, LuaNumber},
    ptr::LuaLightUserData,
    str::LuaString,
    ty::{Direction, LuaType},
};

/// A lua value as seen from the host side of the embedding boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum LuaValue {
    Nil(LuaNil),
    Boolean(LuaBoolean),
    Number(LuaNumber),
    String(LuaString),
    Function(LuaFunction),
    Table(LuaTable),
    LightUserData(LuaLightUserData),
}

impl Default for LuaValue {
    fn default() -> Self {
        Self::nil()
    }
}

impl LuaValue {
    pub const fn nil() -> Self {
        Self::Nil(LuaNil::new())
    }

    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(LuaBoolean::new(v))
    }

    pub const fn number(v: f64) -> Self {
        Self::Number(LuaNumber::new(v))
    }

    #[inline]
    pub fn string(s: &str) -> Self {
        Self::String(LuaString::new(s))
    }

    pub const fn function() -> Self {
        Self::Function(LuaFunction::new())
    }

    pub const fn table() -> Self {
        Self::Table(LuaTable::new())
    }

    pub const fn light_user_data(ptr: *mut c_void) -> Self {
        Self::LightUserData(LuaLightUserData::new(ptr))
    }

    pub fn type_of(&self) -> LuaType {
        match self {
            LuaValue::Nil(v) => v.lua_type(),
            LuaValue::Boolean(v) => v.lua_type(),
            LuaValue::Number(v) => v.lua_type(),
            LuaValue::String(v) => v.lua_type(),
            LuaValue::Function(v) => v.lua_type(),
            LuaValue::Table(v) => v.lua_type(),
            LuaValue::LightUserData(v) => v.lua_type(),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_of().name()
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.type_of().direction()
    }

    #[inline]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil(_))
    }

    /// Lua truthiness: only `nil` and `false` are falsy.
    pub const fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }

    pub const fn is_falsy(&self) -> bool {
        match self {
            LuaValue::Nil(_) => true,
            LuaValue::Boolean(b) => !b.get(),
            _ => false,
        }
    }

    pub const fn as_boolean(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(b.get())
        } else {
            None
        }
    }

    pub const fn as_number(&self) -> Option<f64> {
        if let Self::Number(n) = self {
            Some(n.get())
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    pub const fn as_light_user_data(&self) -> Option<*mut c_void> {
        if let Self::LightUserData(ud) = self {
            Some(ud.as_ptr())
        } else {
            None
        }
    }
}

#[inline]
pub fn type_of(value: &LuaValue) -> LuaType {
    value.type_of()
}

#[inline]
pub fn stringify(value: &LuaValue) -> String {
    value.stringify()
}

impl Display for LuaValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LuaValue::Nil(_) => f.write_str("nil"),
            LuaValue::Boolean(b) => b.fmt(f),
            LuaValue::Number(n) => n.fmt(f),
            LuaValue::String(s) => s.fmt(f),
            LuaValue::Function(_) => f.write_str("function"),
            LuaValue::Table(_) => f.write_str("table"),
            LuaValue::LightUserData(ud) => ud.fmt(f),
        }
    }
}

impl From<LuaNil> for LuaValue {
    fn from(value: LuaNil) -> Self {
        Self::Nil(value)
    }
}

impl From<LuaBoolean> for LuaValue {
    fn from(value: LuaBoolean) -> Self {
        Self::Boolean(value)
    }
}

impl From<LuaNumber> for LuaValue {
    fn from(value: LuaNumber) -> Self {
        Self::Number(value)
    }
}

impl From<LuaString> for LuaValue {
    fn from(value: LuaString) -> Self {
        Self::String(value)
    }
}

impl From<LuaFunction> for LuaValue {
    fn from(value: LuaFunction) -> Self {
        Self::Function(value)
    }
}

impl From<LuaTable> for LuaValue {
    fn from(value: LuaTable) -> Self {
        Self::Table(value)
    }
}

impl From<LuaLightUserData> for LuaValue {
    fn from(value: LuaLightUserData) -> Self {
        Self::LightUserData(value)
    }
}

impl From<bool> for LuaValue {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<f64> for LuaValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for LuaValue {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for LuaValue {
    fn from(value: String) -> Self {
        Self::String(LuaString::from(value))
    }
}

impl From<*mut c_void> for LuaValue {
    fn from(value: *mut c_void) -> Self {
        Self::LightUserData(LuaLightUserData::from(value))
    }
}

impl<T> From<Option<T>> for LuaValue
where
    T: Into<LuaValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::nil, Into::into)
    }
}

fn mismatch(expected: LuaType, actual: LuaType) -> ValueError {
    log::debug!("cannot read a {actual} value as {expected}");
    ValueError::TypeMismatch { expected, actual }
}

impl TryFrom<&LuaValue> for bool {
    type Error = ValueError;

    fn try_from(value: &LuaValue) -> ValueResult<Self> {
        value
            .as_boolean()
            .ok_or_else(|| mismatch(LuaType::Boolean, value.type_of()))
    }
}

impl TryFrom<&LuaValue> for f64 {
    type Error = ValueError;

    fn try_from(value: &LuaValue) -> ValueResult<Self> {
        value
            .as_number()
            .ok_or_else(|| mismatch(LuaType::Number, value.type_of()))
    }
}

impl<'a> TryFrom<&'a LuaValue> for &'a str {
    type Error = ValueError;

    fn try_from(value: &'a LuaValue) -> ValueResult<Self> {
        value
            .as_str()
            .ok_or_else(|| mismatch(LuaType::String, value.type_of()))
    }
}

impl TryFrom<LuaValue> for String {
    type Error = ValueError;

    fn try_from(value: LuaValue) -> ValueResult<Self> {
        match value {
            LuaValue::String(s) => Ok(s.into_string()),
            other => Err(mismatch(LuaType::String, other.type_of())),
        }
    }
}

impl TryFrom<LuaValue> for *mut c_void {
    type Error = ValueError;

    fn try_from(value: LuaValue) -> ValueResult<Self> {
        value
            .as_light_user_data()
            .ok_or_else(|| mismatch(LuaType::LightUserData, value.type_of()))
    }
}
