//! Descriptor files: one C function signature per line.
//!
//! ```text
//! .bridge .C4SliceResult_b c4blob_getContents C4BlobStore*:store C4BlobKey:key C4Error*:outError
//! .raw .void c4key_free C4Key*:key
//! ```
//!
//! The first token marks the line as bridged (`.bridge`) or raw-only (any
//! other token). The second is the return type behind a `.` sigil, the
//! third the function name, and the rest are `type:name` parameters.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::SourceSpan;

use crate::{CType, Error, Literals, Result, SourceContext};

/// Marker token for lines that get a bridge declaration.
pub const BRIDGE_MARKER: &str = ".bridge";

/// Which layers a descriptor line contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Bridge wrapper in `Native`, extern declaration in `NativeRaw`
    Bridge,
    /// Extern declaration in `Native` only
    RawOnly,
}

impl Binding {
    fn from_marker(marker: &str) -> Self {
        if marker == BRIDGE_MARKER {
            Binding::Bridge
        } else {
            Binding::RawOnly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Binding::Bridge => "bridge",
            Binding::RawOnly => "raw",
        }
    }
}

/// A `type:name` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: CType,
    pub name: String,
}

impl Param {
    pub fn new(ty: CType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// Return type and parameters of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub return_type: CType,
    pub params: Vec<Param>,
}

/// What the generator knows about a line beyond its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The signature was parsed
    Signature(Signature),
    /// Every layer is a literal override, so the tokens after the name
    /// were not interpreted
    Literal,
}

/// One parsed descriptor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub binding: Binding,
    pub name: String,
    /// 1-based line number in the descriptor file
    pub line: usize,
    pub body: Body,
}

impl Descriptor {
    /// The parsed signature, if the line was not fully literal.
    pub fn signature(&self) -> Option<&Signature> {
        match &self.body {
            Body::Signature(sig) => Some(sig),
            Body::Literal => None,
        }
    }
}

/// A parsed descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorFile {
    path: PathBuf,
    descriptors: Vec<Descriptor>,
}

impl DescriptorFile {
    /// Read and parse a descriptor file.
    pub fn open(path: impl AsRef<Path>, literals: &Literals) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let mut file = Self::parse(&content, &filename, literals)?;
        file.path = path;
        Ok(file)
    }

    /// Parse descriptor text. Stops at the first malformed line.
    pub fn parse(content: &str, filename: &str, literals: &Literals) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let mut descriptors = Vec::new();
        let mut offset = 0;

        for (index, raw_line) in content.split_inclusive('\n').enumerate() {
            let line = raw_line.trim_end_matches(['\n', '\r']);
            descriptors.push(parse_line(&ctx, line, offset, index + 1, literals)?);
            offset += raw_line.len();
        }

        Ok(Self {
            path: PathBuf::from(filename),
            descriptors,
        })
    }

    /// Path the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines in file order.
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl FromStr for DescriptorFile {
    type Err = Box<Error>;

    /// Parse without literal overrides.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, "descriptor", &Literals::default())
    }
}

/// A whitespace-delimited token and its byte offset in the file.
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    offset: usize,
}

impl Token<'_> {
    fn span(&self) -> SourceSpan {
        (self.offset, self.text.len()).into()
    }

    fn sub_span(&self, start: usize, len: usize) -> SourceSpan {
        (self.offset + start, len).into()
    }
}

fn tokenize(line: &str, base: usize) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    text: &line[s..i],
                    offset: base + s,
                });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        tokens.push(Token {
            text: &line[s..],
            offset: base + s,
        });
    }

    tokens
}

fn parse_line(
    ctx: &SourceContext,
    line: &str,
    offset: usize,
    line_no: usize,
    literals: &Literals,
) -> Result<Descriptor> {
    let tokens = tokenize(line, offset);

    let Some(marker) = tokens.first() else {
        return Err(ctx.empty_line((offset, line.len())));
    };
    let Some(ret) = tokens.get(1) else {
        return Err(ctx.missing_token("return type", marker.span()));
    };
    let Some(name) = tokens.get(2) else {
        return Err(ctx.missing_token("function name", ret.span()));
    };

    let binding = Binding::from_marker(marker.text);

    // Fully overridden lines only need a marker and a name.
    if literals.covers(binding, name.text) {
        return Ok(Descriptor {
            binding,
            name: name.text.to_string(),
            line: line_no,
            body: Body::Literal,
        });
    }

    let return_type = match ret.text.strip_prefix('.') {
        Some(ty) if !ty.is_empty() => ty,
        _ => return Err(ctx.invalid_return_type(ret.text, ret.span())),
    };

    let params = tokens[3..]
        .iter()
        .map(|token| parse_param(ctx, token))
        .collect::<Result<Vec<_>>>()?;

    Ok(Descriptor {
        binding,
        name: name.text.to_string(),
        line: line_no,
        body: Body::Signature(Signature {
            return_type: CType::parse(return_type),
            params,
        }),
    })
}

fn parse_param(ctx: &SourceContext, token: &Token<'_>) -> Result<Param> {
    let Some((ty, name)) = token.text.split_once(':') else {
        return Err(ctx.malformed_param(
            token.text,
            "parameters are written `type:name`, e.g. `C4Database*:db`",
            token.span(),
        ));
    };

    if ty.is_empty() {
        return Err(ctx.malformed_param(token.text, "the parameter type is empty", token.span()));
    }
    if name.is_empty() {
        return Err(ctx.malformed_param(token.text, "the parameter name is empty", token.span()));
    }
    if let Some(extra) = name.find(':') {
        let at = ty.len() + 1 + extra;
        return Err(ctx.malformed_param(
            token.text,
            "a parameter has exactly one ':' separating type and name",
            token.sub_span(at, 1),
        ));
    }

    Ok(Param::new(CType::parse(ty), name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LiteralCatalog;

    fn parse(content: &str) -> Result<DescriptorFile> {
        content.parse()
    }

    fn parse_one(line: &str) -> Descriptor {
        let file = parse(line).expect("descriptor should parse");
        assert_eq!(file.len(), 1);
        file.descriptors()[0].clone()
    }

    #[test]
    fn test_bridge_line() {
        let d = parse_one(
            ".bridge .C4SliceResult_b c4blob_getContents C4BlobStore*:store C4BlobKey:key C4Error*:outError",
        );

        assert_eq!(d.binding, Binding::Bridge);
        assert_eq!(d.name, "c4blob_getContents");
        assert_eq!(d.line, 1);

        let sig = d.signature().unwrap();
        assert_eq!(sig.return_type, CType::SliceResultBytes);
        assert_eq!(
            sig.params,
            vec![
                Param::new(CType::Named("C4BlobStore*".into()), "store"),
                Param::new(CType::Named("C4BlobKey".into()), "key"),
                Param::new(CType::Named("C4Error*".into()), "outError"),
            ]
        );
    }

    #[test]
    fn test_raw_only_line_without_params() {
        let d = parse_one(".raw .C4Key* c4key_new");

        assert_eq!(d.binding, Binding::RawOnly);
        assert_eq!(d.name, "c4key_new");
        let sig = d.signature().unwrap();
        assert_eq!(sig.return_type, CType::Named("C4Key*".into()));
        assert!(sig.params.is_empty());
    }

    #[test]
    fn test_any_other_marker_is_raw_only() {
        assert_eq!(parse_one("- .void c4key_reset C4Key*:key").binding, Binding::RawOnly);
    }

    #[test]
    fn test_parameter_order_is_preserved() {
        let d = parse_one(".bridge .bool f a:one b:two c:three d:four");
        let names: Vec<_> = d
            .signature()
            .unwrap()
            .params
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["one", "two", "three", "four"]);
    }

    #[test]
    fn test_extra_whitespace_and_crlf() {
        let file = parse(".bridge\t.void   c4a  C4Slice:s \r\n.raw .void c4b\r\n").unwrap();
        assert_eq!(file.len(), 2);
        assert_eq!(file.descriptors()[0].name, "c4a");
        assert_eq!(file.descriptors()[1].line, 2);
    }

    #[test]
    fn test_empty_file() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_blank_line_is_an_error() {
        let err = parse(".raw .void c4a\n\n.raw .void c4b\n").unwrap_err();
        assert!(matches!(*err, Error::EmptyLine { .. }));
    }

    #[test]
    fn test_missing_return_type() {
        let err = parse(".bridge").unwrap_err();
        assert!(matches!(*err, Error::MissingToken { what: "return type", .. }));
    }

    #[test]
    fn test_missing_name() {
        let err = parse(".bridge .void").unwrap_err();
        assert!(matches!(*err, Error::MissingToken { what: "function name", .. }));
    }

    #[test]
    fn test_return_type_without_sigil() {
        let err = parse(".void c4key_free C4Key*:key").unwrap_err();
        match *err {
            Error::InvalidReturnType { token, span, .. } => {
                assert_eq!(token, "c4key_free");
                assert_eq!(span.offset(), 6);
                assert_eq!(span.len(), 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parameter_without_separator() {
        let err = parse(".raw .void c4a ok:fine\n.bridge .void c4b C4Key*key\n").unwrap_err();
        match *err {
            Error::MalformedParam { token, span, .. } => {
                assert_eq!(token, "C4Key*key");
                // second line starts at byte 23
                assert_eq!(span.offset(), 23 + 18);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parameter_with_empty_parts() {
        assert!(matches!(
            *parse(".raw .void c4a :name").unwrap_err(),
            Error::MalformedParam { .. }
        ));
        assert!(matches!(
            *parse(".raw .void c4a C4Key*:").unwrap_err(),
            Error::MalformedParam { .. }
        ));
    }

    #[test]
    fn test_parameter_with_two_separators() {
        let err = parse(".raw .void c4a a:b:c").unwrap_err();
        match *err {
            Error::MalformedParam { span, .. } => {
                assert_eq!(span.offset(), 15 + 3);
                assert_eq!(span.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_literal_line_skips_parameter_parsing() {
        let literals = Literals::new(
            LiteralCatalog::parse("c4indexer_emit\n        // bridge\n"),
            LiteralCatalog::parse("c4indexer_emit\n        // raw\n"),
        );

        let file = DescriptorFile::parse(
            ".bridge .bool c4indexer_emit these are not params\n",
            "C4View_native.cs.template",
            &literals,
        )
        .unwrap();

        let d = &file.descriptors()[0];
        assert_eq!(d.name, "c4indexer_emit");
        assert_eq!(d.body, Body::Literal);
    }

    #[test]
    fn test_literal_line_skips_return_type() {
        let literals = Literals::new(
            LiteralCatalog::parse("c4fn\n        // bridge\n"),
            LiteralCatalog::parse("c4fn\n        // raw\n"),
        );

        let file = DescriptorFile::parse(".bridge bool c4fn whatever\n", "t", &literals).unwrap();

        assert_eq!(file.descriptors()[0].body, Body::Literal);
    }

    #[test]
    fn test_partial_literal_still_parses_signature() {
        let literals = Literals::new(
            LiteralCatalog::parse("c4fn\n        // bridge only\n"),
            LiteralCatalog::default(),
        );

        let err = DescriptorFile::parse(".bridge .void c4fn broken", "t", &literals).unwrap_err();
        assert!(matches!(*err, Error::MalformedParam { .. }));
    }

    #[test]
    fn test_open_records_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("C4Key_native.cs.template");
        std::fs::write(&path, ".raw .void c4key_free C4Key*:key\n").unwrap();

        let file = DescriptorFile::open(&path, &Literals::default()).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.len(), 1);
    }
}
