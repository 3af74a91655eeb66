//! Extern declarations of the raw layer.

use c4bind_codegen::{CodeFragment, Renderable, language::TypeMapper};
use c4bind_descriptor::{CType, Signature};

use crate::CSharpTypeMapper;

/// The attribute line every raw declaration starts with, literal or not.
pub fn dll_import(library: &str) -> String {
    format!(
        "[DllImport({}, CallingConvention = CallingConvention.Cdecl)]",
        library
    )
}

/// An `extern` entry point into the native library.
#[derive(Debug, Clone)]
pub struct RawFn<'a> {
    name: &'a str,
    signature: &'a Signature,
    library: &'a str,
}

impl<'a> RawFn<'a> {
    pub fn new(name: &'a str, signature: &'a Signature, library: &'a str) -> Self {
        Self {
            name,
            signature,
            library,
        }
    }
}

impl Renderable for RawFn<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mapper = CSharpTypeMapper;
        let mut fragments = vec![CodeFragment::line(dll_import(self.library))];

        if self.signature.return_type == CType::Bool {
            fragments.push(CodeFragment::line("[return: MarshalAs(UnmanagedType.U1)]"));
        }

        let params = self
            .signature
            .params
            .iter()
            .map(|p| mapper.raw_param(p))
            .collect::<Vec<_>>()
            .join(", ");

        fragments.push(CodeFragment::line(format!(
            "public static extern {} {}({});",
            mapper.raw_return_type(&self.signature.return_type),
            self.name,
            params
        )));
        fragments.push(CodeFragment::blank());
        fragments
    }
}

#[cfg(test)]
mod tests {
    use c4bind_codegen::CodeBuilder;
    use c4bind_descriptor::Param;

    use super::*;

    fn render(name: &str, signature: &Signature) -> String {
        let mut builder = CodeBuilder::csharp().at_level(2);
        builder.emit(&RawFn::new(name, signature, "Constants.DllName"));
        builder.build()
    }

    #[test]
    fn test_no_params() {
        let sig = Signature {
            return_type: CType::Void,
            params: vec![],
        };
        assert_eq!(
            render("c4_shutdown", &sig),
            "        [DllImport(Constants.DllName, CallingConvention = CallingConvention.Cdecl)]\n        public static extern void c4_shutdown();\n\n"
        );
    }

    #[test]
    fn test_bool_return_is_marshalled() {
        let sig = Signature {
            return_type: CType::Bool,
            params: vec![
                Param::new(CType::parse("C4View*"), "view"),
                Param::new(CType::parse("C4Error*"), "outError"),
            ],
        };
        assert_eq!(
            render("c4view_delete", &sig),
            "        [DllImport(Constants.DllName, CallingConvention = CallingConvention.Cdecl)]\n        [return: MarshalAs(UnmanagedType.U1)]\n        public static extern bool c4view_delete(C4View* view, C4Error* outError);\n\n"
        );
    }

    #[test]
    fn test_params_keep_order() {
        let sig = Signature {
            return_type: CType::parse("C4SliceResult_b"),
            params: vec![
                Param::new(CType::parse("C4Slice_b"), "body"),
                Param::new(CType::parse("bool"), "commit"),
                Param::new(CType::parse("C4Key*[]"), "keys"),
            ],
        };
        let out = render("c4doc_f", &sig);
        assert!(out.contains(
            "public static extern C4SliceResult c4doc_f(C4Slice body, [MarshalAs(UnmanagedType.U1)]bool commit, C4Key** keys);"
        ));
        assert!(!out.contains("[return:"));
    }

    #[test]
    fn test_library_is_configurable() {
        let sig = Signature {
            return_type: CType::Void,
            params: vec![],
        };
        let mut builder = CodeBuilder::csharp();
        builder.emit(&RawFn::new("f", &sig, "\"LiteCore\""));
        assert!(builder.build().starts_with(
            "[DllImport(\"LiteCore\", CallingConvention = CallingConvention.Cdecl)]\n"
        ));
    }
}
