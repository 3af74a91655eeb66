//! C# type mapper implementation.

use c4bind_codegen::language::TypeMapper;
use c4bind_descriptor::{CType, Param};

/// Maps descriptor types to C# for both layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn bridge_type(&self, ty: &CType) -> String {
        match ty {
            CType::Slice | CType::SliceResult => "string".to_string(),
            CType::SliceBytes | CType::SliceResultBytes => "byte[]".to_string(),
            CType::UIntPtr => "ulong".to_string(),
            other => other.to_string(),
        }
    }

    fn raw_return_type(&self, ty: &CType) -> String {
        let token = ty.to_string();
        match token.strip_suffix(CType::BYTES_SUFFIX) {
            Some(stripped) => stripped.to_string(),
            None => token,
        }
    }

    fn raw_param(&self, param: &Param) -> String {
        let name = &param.name;
        match &param.ty {
            CType::Bool => format!("[MarshalAs(UnmanagedType.U1)]bool {}", name),
            ty if ty.is_slice() => format!("C4Slice {}", name),
            CType::PointerArray(elem) => format!("{}** {}", elem, name),
            ty => format!("{} {}", ty, name),
        }
    }
}

impl CSharpTypeMapper {
    /// Statement that pins or converts a parameter for the duration of
    /// the native call, without its trailing brace.
    pub fn scope(&self, param: &Param) -> Option<String> {
        let name = &param.name;
        match &param.ty {
            ty if ty.is_text_slice() => {
                Some(format!("using(var {0}_ = new C4String({0}))", name))
            }
            ty if ty.is_byte_slice() => Some(format!("fixed(byte* {0}_ = {0})", name)),
            CType::PointerArray(elem) => Some(format!("fixed({1}** {0}_ = {0})", name, elem)),
            _ => None,
        }
    }

    /// Expression passed to the raw declaration for a bridge parameter.
    pub fn call_arg(&self, param: &Param) -> String {
        let name = &param.name;
        match &param.ty {
            ty if ty.is_text_slice() => format!("{}_.AsC4Slice()", name),
            ty if ty.is_byte_slice() => format!("new C4Slice({0}_, (ulong){0}.Length)", name),
            CType::PointerArray(_) => format!("{}_", name),
            CType::UIntPtr => format!("(UIntPtr){}", name),
            _ => name.clone(),
        }
    }

    /// Expression turning the raw result `retVal` into the bridge return
    /// value, for slice return types.
    pub fn slice_return(&self, ty: &CType) -> Option<&'static str> {
        match ty {
            CType::SliceResult => Some("((C4Slice)retVal).CreateString()"),
            CType::SliceResultBytes => Some("((C4Slice)retVal).ToArrayFast()"),
            CType::SliceBytes => Some("retVal.ToArrayFast()"),
            CType::Slice => Some("retVal.CreateString()"),
            _ => None,
        }
    }
}
