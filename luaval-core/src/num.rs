use std::{fmt::Display, ops::Deref};

use crate::{marker::LuaKind, ty::LuaType};

/// Fractional digits printed for a number when the formatter asks for none.
pub const DEFAULT_NUMBER_PRECISION: usize = 6;

#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LuaBoolean(bool);

impl LuaBoolean {
    pub const fn new(v: bool) -> Self {
        Self(v)
    }

    pub const fn get(self) -> bool {
        self.0
    }
}

impl LuaKind for LuaBoolean {
    const TYPE: LuaType = LuaType::Boolean;
}

impl From<bool> for LuaBoolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl Deref for LuaBoolean {
    type Target = bool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for LuaBoolean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0 { "true" } else { "false" })
    }
}

#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LuaNumber(f64);

impl LuaNumber {
    pub const fn new(v: f64) -> Self {
        Self(v)
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl LuaKind for LuaNumber {
    const TYPE: LuaType = LuaType::Number;
}

impl From<f64> for LuaNumber {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Deref for LuaNumber {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Fixed notation, `DEFAULT_NUMBER_PRECISION` fractional digits unless the
/// formatter carries a precision. Non-finite values use the C spellings.
impl Display for LuaNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.0;
        if n.is_nan() {
            return f.write_str(if n.is_sign_negative() { "-nan" } else { "nan" });
        }
        if n.is_infinite() {
            return f.write_str(if n.is_sign_negative() { "-inf" } else { "inf" });
        }

        let precision = f.precision().unwrap_or(DEFAULT_NUMBER_PRECISION);
        write!(f, "{n:.precision$}")
    }
}
