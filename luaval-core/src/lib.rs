//! Host-side representation of lua values crossing an embedding boundary.
//!
//! [`LuaValue`] is a closed sum over the seven kinds the host exchanges with
//! an embedded interpreter. Each variant wraps a payload type whose kind is
//! fixed by [`LuaKind::TYPE`], so a value's tag and payload can never disagree.

pub mod err;
pub mod marker;
pub mod num;
pub mod ptr;
pub mod str;
mod test;
pub mod ty;
pub mod val;

pub use err::{ValueError, ValueResult};
pub use marker::{LuaFunction, LuaKind, LuaNil, LuaTable};
pub use num::{LuaBoolean, LuaNumber, DEFAULT_NUMBER_PRECISION};
pub use ptr::LuaLightUserData;
pub use str::LuaString;
pub use ty::{Direction, LuaType};
pub use val::{stringify, type_of, LuaValue};
