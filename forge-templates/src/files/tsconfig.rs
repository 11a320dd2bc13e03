//! TypeScript compiler configurations.
//!
//! `tsconfig.json` extends `tsconfig/base.json`; the per-target configs in
//! `tsconfig/` extend the base and only override where their output goes.

use sdkforge_core::GeneratedFile;
use serde_json::json;

use crate::paths;

/// Shared compiler options for every build target.
pub struct TsConfigBase;

impl GeneratedFile for TsConfigBase {
    fn path(&self) -> &str {
        paths::TSCONFIG_BASE
    }

    fn render(&self) -> String {
        r#"{
  "compilerOptions": {
    "target": "ES2021",
    "lib": ["ES2022", "DOM"],
    "module": "ESNext",
    "moduleResolution": "Node",
    "rootDir": "../src",
    "outDir": "../dist",
    "declaration": true,
    "declarationMap": true,
    "sourceMap": true,
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "resolveJsonModule": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true
  },
  "include": ["../src/**/*.ts"]
}
"#
        .to_string()
    }
}

/// Output flavour of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTarget {
    Esm,
    Cjs,
    Types,
}

impl BuildTarget {
    pub const ALL: [BuildTarget; 3] = [BuildTarget::Esm, BuildTarget::Cjs, BuildTarget::Types];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTarget::Esm => "esm",
            BuildTarget::Cjs => "cjs",
            BuildTarget::Types => "types",
        }
    }
}

/// A build configuration extending the base.
pub struct TsConfigTarget {
    target: BuildTarget,
}

impl TsConfigTarget {
    pub fn new(target: BuildTarget) -> Self {
        Self { target }
    }
}

impl GeneratedFile for TsConfigTarget {
    fn path(&self) -> &str {
        match self.target {
            BuildTarget::Esm => paths::TSCONFIG_ESM,
            BuildTarget::Cjs => paths::TSCONFIG_CJS,
            BuildTarget::Types => paths::TSCONFIG_TYPES,
        }
    }

    fn render(&self) -> String {
        let mut compiler_options = json!({
            "outDir": format!("../dist/{}", self.target.as_str()),
        });
        if self.target == BuildTarget::Cjs {
            compiler_options["module"] = json!("CommonJS");
        }

        let config = json!({
            "extends": "./base.json",
            "compilerOptions": compiler_options,
        });
        format!("{:#}\n", config)
    }
}

/// The root `tsconfig.json` picked up by editors and test runners.
pub struct TsConfigRoot;

impl GeneratedFile for TsConfigRoot {
    fn path(&self) -> &str {
        paths::TSCONFIG_ROOT
    }

    fn render(&self) -> String {
        let config = json!({
            "extends": "./tsconfig/base.json",
            "compilerOptions": {
                "rootDir": ".",
                "noEmit": true,
            },
            "include": ["src/**/*.ts", "test/**/*.ts"],
        });
        format!("{:#}\n", config)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn parse(file: &dyn GeneratedFile) -> Value {
        serde_json::from_str(&file.render()).unwrap()
    }

    #[test]
    fn test_targets_extend_base() {
        for target in BuildTarget::ALL {
            let config = parse(&TsConfigTarget::new(target));
            assert_eq!(config["extends"], "./base.json");
        }
    }

    #[test]
    fn test_targets_only_differ_in_output() {
        let esm = parse(&TsConfigTarget::new(BuildTarget::Esm));
        let cjs = parse(&TsConfigTarget::new(BuildTarget::Cjs));
        let types = parse(&TsConfigTarget::new(BuildTarget::Types));

        assert_eq!(esm["compilerOptions"]["outDir"], "../dist/esm");
        assert_eq!(cjs["compilerOptions"]["outDir"], "../dist/cjs");
        assert_eq!(types["compilerOptions"]["outDir"], "../dist/types");

        assert_eq!(cjs["compilerOptions"]["module"], "CommonJS");
        assert!(esm["compilerOptions"].get("module").is_none());
        assert!(types["compilerOptions"].get("module").is_none());

        for config in [&esm, &cjs, &types] {
            let keys: Vec<_> = config.as_object().unwrap().keys().cloned().collect();
            assert_eq!(keys, vec!["extends", "compilerOptions"]);
        }
    }

    #[test]
    fn test_root_extends_base() {
        let root = parse(&TsConfigRoot);
        assert_eq!(root["extends"], "./tsconfig/base.json");
    }

    #[test]
    fn test_base_is_valid_json() {
        let base = parse(&TsConfigBase);
        assert!(base.get("extends").is_none());
        assert_eq!(base["compilerOptions"]["strict"], true);
    }
}
