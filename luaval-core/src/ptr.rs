use std::{ffi::c_void, fmt::Display};

use crate::{marker::LuaKind, ty::LuaType};

/// A raw pointer handed to the interpreter by the host.
///
/// Never dereferenced, freed or otherwise owned here; the embedder keeps the
/// pointee alive for as long as any copy of this value is reachable. Null is
/// a valid payload.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LuaLightUserData(*mut c_void);

// SAFETY: the pointer is carried as an opaque address and never dereferenced
// by this crate, so moving or sharing it across threads is no different from
// moving a `usize`. Whatever it points at is the embedder's responsibility.
unsafe impl Send for LuaLightUserData {}

// SAFETY: see `Send` above. There is no interior mutability.
unsafe impl Sync for LuaLightUserData {}

impl LuaLightUserData {
    pub const fn new(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    pub const fn as_ptr(self) -> *mut c_void {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl LuaKind for LuaLightUserData {
    const TYPE: LuaType = LuaType::LightUserData;
}

impl From<*mut c_void> for LuaLightUserData {
    fn from(value: *mut c_void) -> Self {
        log::trace!("light userdata wraps {value:p}");
        Self::new(value)
    }
}

/// Only the kind name; the address is never rendered.
impl Display for LuaLightUserData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(LuaType::LightUserData.name())
    }
}
