//! Managed wrappers of the bridge layer.

use c4bind_codegen::{CodeFragment, Renderable, language::TypeMapper};
use c4bind_descriptor::{CType, Signature};

use crate::CSharpTypeMapper;

/// A `Native` method that converts managed arguments, forwards to the
/// `NativeRaw` declaration of the same name, and converts the result back.
///
/// ```text
/// public static string c4doc_getType(C4Document* doc)
/// {
///     using(var retVal = NativeRaw.c4doc_getType(doc)) {
///         return ((C4Slice)retVal).CreateString();
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BridgeFn<'a> {
    name: &'a str,
    signature: &'a Signature,
}

impl<'a> BridgeFn<'a> {
    pub fn new(name: &'a str, signature: &'a Signature) -> Self {
        Self { name, signature }
    }

    fn header(&self, mapper: &CSharpTypeMapper) -> String {
        let params = self
            .signature
            .params
            .iter()
            .map(|p| mapper.bridge_param(p))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "public static {} {}({})",
            mapper.bridge_type(&self.signature.return_type),
            self.name,
            params
        )
    }

    fn call(&self, mapper: &CSharpTypeMapper) -> Vec<CodeFragment> {
        let args = self
            .signature
            .params
            .iter()
            .map(|p| mapper.call_arg(p))
            .collect::<Vec<_>>()
            .join(", ");
        let call = format!("NativeRaw.{}({})", self.name, args);

        let ret = &self.signature.return_type;
        if let Some(convert) = mapper.slice_return(ret) {
            return vec![CodeFragment::block(
                format!("using(var retVal = {}) {{", call),
                vec![CodeFragment::line(format!("return {};", convert))],
                Some("}".to_string()),
            )];
        }

        let statement = match ret {
            CType::Void => format!("{};", call),
            CType::UIntPtr => format!("return ({}).ToUInt64();", call),
            _ => format!("return {};", call),
        };
        vec![CodeFragment::line(statement)]
    }

    fn body(&self, mapper: &CSharpTypeMapper) -> Vec<CodeFragment> {
        let mut scopes: Vec<String> = self
            .signature
            .params
            .iter()
            .filter_map(|p| mapper.scope(p))
            .collect();

        let call = self.call(mapper);
        let Some(innermost) = scopes.pop() else {
            return call;
        };

        // Scopes stack without braces; only the innermost one opens a block.
        let mut body: Vec<CodeFragment> = scopes.into_iter().map(CodeFragment::Line).collect();
        body.push(CodeFragment::block(
            format!("{} {{", innermost),
            call,
            Some("}".to_string()),
        ));
        body
    }
}

impl Renderable for BridgeFn<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mapper = CSharpTypeMapper;
        vec![
            CodeFragment::line(self.header(&mapper)),
            CodeFragment::line("{"),
            CodeFragment::indent(self.body(&mapper)),
            CodeFragment::line("}"),
            CodeFragment::blank(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use c4bind_codegen::CodeBuilder;
    use c4bind_descriptor::Param;

    use super::*;

    fn render(name: &str, ret: &str, params: &[(&str, &str)]) -> String {
        let signature = Signature {
            return_type: CType::parse(ret),
            params: params
                .iter()
                .map(|(ty, name)| Param::new(CType::parse(ty), *name))
                .collect(),
        };
        let mut builder = CodeBuilder::csharp().at_level(2);
        builder.emit(&BridgeFn::new(name, &signature));
        builder.build()
    }

    #[test]
    fn test_stacked_scopes() {
        let out = render(
            "c4view_open",
            "C4View*",
            &[
                ("C4Database*", "database"),
                ("C4Slice", "path"),
                ("C4Slice", "viewName"),
                ("C4Slice", "version"),
                ("C4DatabaseConfig*", "config"),
                ("C4Error*", "outError"),
            ],
        );
        assert_eq!(
            out,
            "        public static C4View* c4view_open(C4Database* database, string path, string viewName, string version, C4DatabaseConfig* config, C4Error* outError)
        {
            using(var path_ = new C4String(path))
            using(var viewName_ = new C4String(viewName))
            using(var version_ = new C4String(version)) {
                return NativeRaw.c4view_open(database, path_.AsC4Slice(), viewName_.AsC4Slice(), version_.AsC4Slice(), config, outError);
            }
        }

"
        );
    }

    #[test]
    fn test_void_without_scopes() {
        let out = render("c4view_close", "void", &[("C4View*", "view")]);
        assert_eq!(
            out,
            "        public static void c4view_close(C4View* view)
        {
            NativeRaw.c4view_close(view);
        }

"
        );
    }

    #[test]
    fn test_uintptr_conversions() {
        let out = render("c4enum_skip", "UIntPtr", &[("C4Enum*", "e"), ("UIntPtr", "count")]);
        assert!(out.contains("public static ulong c4enum_skip(C4Enum* e, ulong count)"));
        assert!(out.contains(
            "            return (NativeRaw.c4enum_skip(e, (UIntPtr)count)).ToUInt64();\n"
        ));
    }

    #[test]
    fn test_slice_result_return() {
        let out = render(
            "c4blob_getContents",
            "C4SliceResult_b",
            &[
                ("C4BlobStore*", "store"),
                ("C4BlobKey", "key"),
                ("C4Error*", "outError"),
            ],
        );
        assert_eq!(
            out,
            "        public static byte[] c4blob_getContents(C4BlobStore* store, C4BlobKey key, C4Error* outError)
        {
            using(var retVal = NativeRaw.c4blob_getContents(store, key, outError)) {
                return ((C4Slice)retVal).ToArrayFast();
            }
        }

"
        );
    }

    #[test]
    fn test_slice_return_conversions() {
        assert!(render("a", "C4Slice", &[]).contains("return retVal.CreateString();"));
        assert!(render("b", "C4Slice_b", &[]).contains("return retVal.ToArrayFast();"));
        assert!(render("c", "C4SliceResult", &[]).contains("return ((C4Slice)retVal).CreateString();"));
    }

    #[test]
    fn test_byte_scope_with_slice_return() {
        let out = render("c4doc_put", "C4SliceResult", &[("C4Slice_b", "body")]);
        assert_eq!(
            out,
            "        public static string c4doc_put(byte[] body)
        {
            fixed(byte* body_ = body) {
                using(var retVal = NativeRaw.c4doc_put(new C4Slice(body_, (ulong)body.Length))) {
                    return ((C4Slice)retVal).CreateString();
                }
            }
        }

"
        );
    }

    #[test]
    fn test_buffer_param_and_result_nest_two_blocks() {
        let signature = Signature {
            return_type: CType::parse("C4SliceResult_b"),
            params: vec![Param::new(CType::parse("C4Slice_b"), "body")],
        };

        let blocks: usize = BridgeFn::new("c4doc_put", &signature)
            .to_fragments()
            .iter()
            .map(CodeFragment::block_count)
            .sum();

        assert_eq!(blocks, 2);
    }

    #[test]
    fn test_pointer_array_is_pinned() {
        let out = render(
            "c4indexer_begin",
            "C4Indexer*",
            &[("C4Database*", "db"), ("C4View*[]", "views")],
        );
        assert!(out.contains("public static C4Indexer* c4indexer_begin(C4Database* db, C4View*[] views)"));
        assert!(out.contains("            fixed(C4View** views_ = views) {\n"));
        assert!(out.contains("                return NativeRaw.c4indexer_begin(db, views_);\n"));
    }
}
