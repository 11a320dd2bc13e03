//! biome.json generator.

use sdkforge_core::GeneratedFile;

use crate::paths;

/// Formatter and linter settings.
pub struct Biome;

impl GeneratedFile for Biome {
    fn path(&self) -> &str {
        paths::BIOME_JSON
    }

    fn render(&self) -> String {
        r#"{
  "$schema": "https://biomejs.dev/schemas/1.9.4/schema.json",
  "organizeImports": {
    "enabled": true
  },
  "files": {
    "ignore": ["dist", "docs", "typechain", "node_modules"]
  },
  "formatter": {
    "enabled": true,
    "indentStyle": "space",
    "indentWidth": 2,
    "lineWidth": 100
  },
  "linter": {
    "enabled": true,
    "rules": {
      "recommended": true
    }
  },
  "javascript": {
    "formatter": {
      "quoteStyle": "double",
      "semicolons": "always"
    }
  }
}
"#
        .to_string()
    }
}
