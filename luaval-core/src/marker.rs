use crate::ty::LuaType;

/// A payload type with a fixed lua kind.
///
/// The tag lives on the type rather than in a field, so a payload can never
/// report a kind other than its own.
pub trait LuaKind {
    const TYPE: LuaType;

    #[inline]
    fn lua_type(&self) -> LuaType {
        Self::TYPE
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LuaNil(());

impl LuaNil {
    pub const fn new() -> Self {
        Self(())
    }
}

impl LuaKind for LuaNil {
    const TYPE: LuaType = LuaType::Nil;
}

/// Stands in for a function living on the interpreter side. Holds no reference to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LuaFunction(());

impl LuaFunction {
    pub const fn new() -> Self {
        Self(())
    }
}

impl LuaKind for LuaFunction {
    const TYPE: LuaType = LuaType::Function;
}

/// Stands in for a table living on the interpreter side. Holds no reference to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LuaTable(());

impl LuaTable {
    pub const fn new() -> Self {
        Self(())
    }
}

impl LuaKind for LuaTable {
    const TYPE: LuaType = LuaType::Table;
}
