//! Project templates for the sdkforge scaffolder.
//!
//! This crate turns a [`ProjectContext`](sdkforge_core::ProjectContext) into a
//! [`ProjectPlan`]: the ordered directories and rendered files of a
//! TypeScript blockchain SDK starter. It performs no I/O.
//!
//! # Generated Output
//!
//! - `tsconfig.json`, `tsconfig/{base,esm,cjs,types}.json` - compiler settings
//! - `package.json` - manifest with build, docs, lint and test scripts
//! - `typedoc.json`, `biome.json` - documentation and lint/format settings
//! - `src/index.ts`, `test/sdk.test.ts` - example source and tests
//! - `README.md`
//! - optional: `.gitignore`, `.changeset/config.json`, `abis/ERC20.json`,
//!   `test/config/*.ts`

mod code_file;
mod registry;

pub mod compose;
pub mod files;
pub mod paths;

pub use code_file::{CodeFile, Import};
pub use registry::{FileEntry, ProjectPlan, Template, TemplateId, TemplateRegistry};
