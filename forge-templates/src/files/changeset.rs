//! .changeset/config.json generator.

use sdkforge_core::GeneratedFile;

use crate::paths;

/// Changesets release configuration.
pub struct ChangesetConfig;

impl GeneratedFile for ChangesetConfig {
    fn path(&self) -> &str {
        paths::CHANGESET_CONFIG
    }

    fn render(&self) -> String {
        r#"{
  "$schema": "https://unpkg.com/@changesets/config@3.0.2/schema.json",
  "changelog": "@changesets/cli/changelog",
  "commit": false,
  "fixed": [],
  "linked": [],
  "access": "public",
  "baseBranch": "main",
  "updateInternalDependencies": "patch",
  "ignore": []
}
"#
        .to_string()
    }
}
