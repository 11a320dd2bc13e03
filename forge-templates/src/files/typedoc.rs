//! typedoc.json generator.

use sdkforge_core::GeneratedFile;

use crate::paths;

/// Documentation generator settings.
pub struct TypeDoc;

impl GeneratedFile for TypeDoc {
    fn path(&self) -> &str {
        paths::TYPEDOC_JSON
    }

    fn render(&self) -> String {
        r#"{
  "$schema": "https://typedoc.org/schema.json",
  "entryPoints": ["./src/index.ts"],
  "tsconfig": "./tsconfig/base.json",
  "out": "docs",
  "readme": "README.md",
  "excludePrivate": true,
  "excludeInternal": true,
  "includeVersion": true
}
"#
        .to_string()
    }
}
