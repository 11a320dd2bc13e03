//! Path constants for generated files.
//!
//! Centralizes every directory and file path of the generated project.
//! Paths are relative to the project root and always use `/`.

use sdkforge_core::GenerationOptions;

/// Source directory.
pub const SRC_DIR: &str = "src";
/// Test directory.
pub const TEST_DIR: &str = "test";
/// Shared test configuration directory.
pub const TEST_CONFIG_DIR: &str = "test/config";
/// TypeScript build configurations.
pub const TSCONFIG_DIR: &str = "tsconfig";
/// Typechain workspace.
pub const TYPECHAIN_DIR: &str = "typechain";
/// Typechain output directory.
pub const TYPECHAIN_CONTRACTS_DIR: &str = "typechain/contracts";
/// Contract ABIs.
pub const ABIS_DIR: &str = "abis";
/// Changesets configuration directory.
pub const CHANGESET_DIR: &str = ".changeset";

pub const TSCONFIG_BASE: &str = "tsconfig/base.json";
pub const TSCONFIG_ESM: &str = "tsconfig/esm.json";
pub const TSCONFIG_CJS: &str = "tsconfig/cjs.json";
pub const TSCONFIG_TYPES: &str = "tsconfig/types.json";
pub const TSCONFIG_ROOT: &str = "tsconfig.json";
pub const PACKAGE_JSON: &str = "package.json";
pub const TYPEDOC_JSON: &str = "typedoc.json";
pub const BIOME_JSON: &str = "biome.json";
pub const INDEX_TS: &str = "src/index.ts";
pub const SDK_TEST: &str = "test/sdk.test.ts";
pub const TEST_CONFIG: &str = "test/config/test.config.ts";
pub const TEST_UTILS: &str = "test/config/test.utils.ts";
pub const ERC20_ABI: &str = "abis/ERC20.json";
pub const README: &str = "README.md";
pub const GITIGNORE: &str = ".gitignore";
pub const CHANGESET_CONFIG: &str = ".changeset/config.json";

/// Subdirectories to create, parents before children.
pub fn directories(options: &GenerationOptions) -> Vec<&'static str> {
    let mut dirs = vec![SRC_DIR, TEST_DIR, TSCONFIG_DIR];
    if options.extended_tests {
        dirs.push(TEST_CONFIG_DIR);
    }
    if options.include_contract_bindings {
        dirs.extend([TYPECHAIN_DIR, TYPECHAIN_CONTRACTS_DIR, ABIS_DIR]);
    }
    if options.versioning {
        dirs.push(CHANGESET_DIR);
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directories() {
        assert_eq!(
            directories(&GenerationOptions::default()),
            vec!["src", "test", "tsconfig", ".changeset"]
        );
    }

    #[test]
    fn test_parents_come_first() {
        let options = GenerationOptions {
            include_contract_bindings: true,
            extended_tests: true,
            ..Default::default()
        };
        let dirs = directories(&options);

        for (index, dir) in dirs.iter().enumerate() {
            if let Some((parent, _)) = dir.rsplit_once('/') {
                let parent_index = dirs.iter().position(|d| *d == parent).unwrap();
                assert!(parent_index < index, "{parent} must precede {dir}");
            }
        }
    }
}
