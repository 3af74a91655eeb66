use std::path::{Path, PathBuf};

use c4bind_core::GeneratedFile;
use c4bind_descriptor::TemplateConfig;

const LICENSE: &str = r#"//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
"#;

/// A generated `*_native.cs` source file.
///
/// `native` and `native_raw` are the already-indented class bodies.
pub struct NativeCs<'a> {
    file_name: String,
    display_name: String,
    year: i32,
    template: &'a TemplateConfig,
    native: String,
    native_raw: String,
}

impl<'a> NativeCs<'a> {
    pub fn new(
        file_name: impl Into<String>,
        year: i32,
        template: &'a TemplateConfig,
        native: impl Into<String>,
        native_raw: impl Into<String>,
    ) -> Self {
        let file_name = file_name.into();
        let display_name = c4bind_core::display_name(&file_name).to_string();
        Self {
            file_name,
            display_name,
            year,
            template,
            native: native.into(),
            native_raw: native_raw.into(),
        }
    }

    fn header(&self) -> String {
        let mut header = format!("//\n// {}\n//\n", self.display_name);
        if let Some(author) = &self.template.author {
            header.push_str(&format!("// Author:\n// \t{}\n//\n", author));
        }
        header.push_str(&format!(
            "// Copyright (c) {} {} All rights reserved.\n",
            self.year, self.template.copyright
        ));
        header.push_str(LICENSE);
        header
    }
}

/// The line between the two classes keeps its indentation.
const CLASS_GAP: &str = "    ";

impl GeneratedFile for NativeCs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn render(&self) -> String {
        format!(
            r#"{header}
using System;
using System.Linq;
using System.Runtime.InteropServices;

using LiteCore.Util;

namespace {namespace}
{{
    public unsafe static partial class Native
    {{
{native}
    }}
{class_gap}
    public unsafe static partial class NativeRaw
    {{
{native_raw}
    }}
}}
"#,
            header = self.header(),
            namespace = self.template.namespace,
            native = self.native,
            native_raw = self.native_raw,
            class_gap = CLASS_GAP,
        )
    }
}
