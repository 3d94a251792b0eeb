use crate::ty::LuaType;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Type mismatch: expected: {expected}; got: {actual}")]
    TypeMismatch { expected: LuaType, actual: LuaType },

    #[error("Unknown lua type name: {0:?}")]
    UnknownTypeName(String),

    /// A type code the C API defines but this value model does not carry
    /// (`LUA_TNONE`, full userdata, thread).
    #[error("Unsupported lua type code: {0}")]
    UnsupportedRawType(i32),

    #[error("Invalid lua type code: {0}")]
    InvalidRawType(i32),
}

pub type ValueResult<T> = Result<T, ValueError>;
