//! package.json generator.

use sdkforge_core::{GeneratedFile, PackageManager, ProjectContext, ProjectName};
use serde_json::json;

use crate::{
    compose::{Block, block, compose},
    paths,
};

const DEFAULT_VERSION: &str = "0.1.0";
const DEFAULT_DESCRIPTION: &str = "TypeScript SDK for EVM-compatible blockchains";

const BUILD_STAGES: [&str; 4] = ["clean", "build:esm", "build:cjs", "build:types"];
const TYPECHAIN_STAGE: &str = "build:typechain";

/// The package.json manifest.
pub struct PackageJson {
    name: ProjectName,
    package_manager: PackageManager,
    contract_bindings: bool,
    versioning: bool,
}

impl PackageJson {
    pub fn new(ctx: &ProjectContext) -> Self {
        Self {
            name: ctx.name.clone(),
            package_manager: ctx.options.package_manager,
            contract_bindings: ctx.options.include_contract_bindings,
            versioning: ctx.options.versioning,
        }
    }

    /// The `build` pipeline, one `run` invocation per stage.
    pub fn build_pipeline(&self) -> String {
        let stages = compose(
            BUILD_STAGES.to_vec(),
            [(self.contract_bindings, vec![TYPECHAIN_STAGE])],
        );
        stages
            .iter()
            .map(|stage| self.package_manager.run(stage))
            .collect::<Vec<_>>()
            .join(" && ")
    }

    pub fn scripts(&self) -> Block {
        let pm = self.package_manager;
        let mut base = Block::new();
        base.insert("build".to_string(), self.build_pipeline());
        base.extend(block([
            ("clean", "rm -rf dist"),
            ("build:esm", "tsc -p tsconfig/esm.json"),
            ("build:cjs", "tsc -p tsconfig/cjs.json"),
            ("build:types", "tsc -p tsconfig/types.json"),
            ("docs", "typedoc"),
            ("format", "biome format --write ."),
            ("lint", "biome lint ."),
            ("check", "biome check ."),
            ("test", "vitest run"),
        ]));
        base.insert("prepare".to_string(), pm.run("build"));

        let typechain = block([(
            TYPECHAIN_STAGE,
            "typechain --target ethers-v6 --out-dir typechain/contracts 'abis/*.json'",
        )]);
        let mut versioning = block([("changeset", "changeset")]);
        versioning.insert(
            "release".to_string(),
            format!("{} && changeset publish", pm.run("build")),
        );

        compose(
            base,
            [(self.contract_bindings, typechain), (self.versioning, versioning)],
        )
    }

    pub fn dependencies(&self) -> Block {
        compose(
            block([("viem", "^2.21.0")]),
            [(self.contract_bindings, block([("ethers", "^6.13.0")]))],
        )
    }

    pub fn dev_dependencies(&self) -> Block {
        compose(
            block([
                ("@biomejs/biome", "^1.9.4"),
                ("@types/node", "^22.7.0"),
                ("typedoc", "^0.26.7"),
                ("typescript", "^5.6.2"),
                ("vitest", "^2.1.1"),
            ]),
            [
                (self.versioning, block([("@changesets/cli", "^2.27.8")])),
                (
                    self.contract_bindings,
                    block([("@typechain/ethers-v6", "^0.5.1"), ("typechain", "^8.3.2")]),
                ),
            ],
        )
    }
}

impl GeneratedFile for PackageJson {
    fn path(&self) -> &str {
        paths::PACKAGE_JSON
    }

    fn render(&self) -> String {
        let manifest = json!({
            "name": self.name,
            "version": DEFAULT_VERSION,
            "description": DEFAULT_DESCRIPTION,
            "license": "MIT",
            "main": "./dist/cjs/index.js",
            "module": "./dist/esm/index.js",
            "types": "./dist/types/index.d.ts",
            "exports": {
                ".": {
                    "types": "./dist/types/index.d.ts",
                    "import": "./dist/esm/index.js",
                    "require": "./dist/cjs/index.js",
                },
            },
            "files": ["dist"],
            "scripts": self.scripts(),
            "dependencies": self.dependencies(),
            "devDependencies": self.dev_dependencies(),
        });
        format!("{:#}\n", manifest)
    }
}
