//! The closed set of C type tokens the generator understands.

use std::fmt;

/// A type token from a descriptor line.
///
/// Tokens the generator treats specially get their own variant; every
/// other token is carried as [`CType::Named`] and rendered unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CType {
    /// `void`
    Void,
    /// `bool`, marshalled as a single byte
    Bool,
    /// `UIntPtr`, a pointer-sized unsigned integer (`size_t`)
    UIntPtr,
    /// `C4Slice` used as text
    Slice,
    /// `C4SliceResult` used as text; the caller owns the result
    SliceResult,
    /// `C4Slice_b`, a `C4Slice` used as raw bytes
    SliceBytes,
    /// `C4SliceResult_b`, a `C4SliceResult` used as raw bytes
    SliceResultBytes,
    /// `T*[]`, an array of pointers; holds the element type `T`
    PointerArray(String),
    /// Any other token
    Named(String),
}

impl CType {
    /// Suffix that marks a slice as binary data rather than text.
    pub const BYTES_SUFFIX: &'static str = "_b";

    /// Classify a type token.
    pub fn parse(token: &str) -> Self {
        match token {
            "void" => CType::Void,
            "bool" => CType::Bool,
            "UIntPtr" => CType::UIntPtr,
            "C4Slice" => CType::Slice,
            "C4SliceResult" => CType::SliceResult,
            "C4Slice_b" => CType::SliceBytes,
            "C4SliceResult_b" => CType::SliceResultBytes,
            _ => match token.strip_suffix("*[]") {
                Some(elem) if !elem.is_empty() => CType::PointerArray(elem.to_string()),
                _ => CType::Named(token.to_string()),
            },
        }
    }

    /// Whether this is one of the slice types.
    pub fn is_slice(&self) -> bool {
        matches!(
            self,
            CType::Slice | CType::SliceResult | CType::SliceBytes | CType::SliceResultBytes
        )
    }

    /// Whether this slice is converted to and from `string`.
    pub fn is_text_slice(&self) -> bool {
        matches!(self, CType::Slice | CType::SliceResult)
    }

    /// Whether this slice is converted to and from `byte[]`.
    pub fn is_byte_slice(&self) -> bool {
        matches!(self, CType::SliceBytes | CType::SliceResultBytes)
    }

    /// Whether a parameter of this type must be pinned or converted
    /// before it can be handed to the native call.
    pub fn needs_scope(&self) -> bool {
        self.is_slice() || matches!(self, CType::PointerArray(_))
    }

    /// A named token that looks like a slice but is not one of the known
    /// spellings (e.g. `C4Slice_B`). Such tokens pass through unchanged.
    pub fn is_suspicious(&self) -> bool {
        matches!(self, CType::Named(token) if token.starts_with("C4Slice"))
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CType::Void => write!(f, "void"),
            CType::Bool => write!(f, "bool"),
            CType::UIntPtr => write!(f, "UIntPtr"),
            CType::Slice => write!(f, "C4Slice"),
            CType::SliceResult => write!(f, "C4SliceResult"),
            CType::SliceBytes => write!(f, "C4Slice_b"),
            CType::SliceResultBytes => write!(f, "C4SliceResult_b"),
            CType::PointerArray(elem) => write!(f, "{}*[]", elem),
            CType::Named(token) => write!(f, "{}", token),
        }
    }
}
