//! README.md generator.

use sdkforge_core::{GeneratedFile, PackageManager, ProjectContext, ProjectName};

use crate::paths;

/// Project documentation.
pub struct Readme {
    name: ProjectName,
    package_manager: PackageManager,
    example: bool,
    contract_bindings: bool,
    versioning: bool,
    extended_tests: bool,
}

impl Readme {
    pub fn new(ctx: &ProjectContext) -> Self {
        let options = &ctx.options;
        Self {
            name: ctx.name.clone(),
            package_manager: options.package_manager,
            example: options.example_source,
            contract_bindings: options.include_contract_bindings,
            versioning: options.versioning,
            extended_tests: options.extended_tests,
        }
    }

    fn usage(&self) -> String {
        if self.example {
            format!(
                r#"```ts
import {{ createClient, getBlockNumber }} from "{}";

const client = createClient({{ rpcUrl: "https://eth.llamarpc.com" }});
console.log(await getBlockNumber(client));
```"#,
                self.name
            )
        } else {
            "Export the public API of the SDK from `src/index.ts`.".to_string()
        }
    }

    fn scripts_table(&self) -> String {
        let pm = self.package_manager;
        let mut rows = vec![
            (pm.run("build"), "Build ESM, CommonJS and type declarations into `dist/`"),
            (pm.run("test"), "Run the test suite with Vitest"),
            (pm.run("lint"), "Lint with Biome"),
            (pm.run("format"), "Format with Biome"),
            (pm.run("check"), "Lint and format check with Biome"),
            (pm.run("docs"), "Generate API documentation into `docs/`"),
        ];
        if self.contract_bindings {
            rows.push((
                pm.run("build:typechain"),
                "Generate contract bindings from `abis/`",
            ));
        }

        let mut lines = vec![
            "| Command | Description |".to_string(),
            "| --- | --- |".to_string(),
        ];
        lines.extend(
            rows.into_iter()
                .map(|(command, description)| format!("| `{}` | {} |", command, description)),
        );
        lines.join("\n")
    }
}

impl GeneratedFile for Readme {
    fn path(&self) -> &str {
        paths::README
    }

    fn render(&self) -> String {
        let pm = self.package_manager;
        let mut sections = vec![
            format!(
                "# {}\n\nTypeScript SDK for EVM-compatible blockchains, built on [viem](https://viem.sh).",
                self.name
            ),
            format!("## Installation\n\n```sh\n{}\n```", pm.add(self.name.as_str())),
            format!("## Usage\n\n{}", self.usage()),
            format!(
                "## Development\n\n```sh\n{} install\n```\n\n{}",
                pm,
                self.scripts_table()
            ),
        ];

        if self.extended_tests {
            sections.push(
                "## Testing\n\n\
                 Shared settings live in `test/config/test.config.ts`. Set `TEST_RPC_URL` \
                 to run the suites that talk to a live node; they are skipped otherwise."
                    .to_string(),
            );
        }

        if self.contract_bindings {
            sections.push(format!(
                "## Contract bindings\n\n\
                 Place contract ABIs in `abis/` (an ERC-20 ABI is included) and run \
                 `{}` to generate typed bindings into `typechain/contracts/`.",
                pm.run("build:typechain")
            ));
        }

        if self.versioning {
            sections.push(format!(
                "## Releasing\n\n\
                 This project uses [Changesets](https://github.com/changesets/changesets). \
                 Run `{}` to describe a change, then `{}` to build and publish.",
                pm.exec("changeset"),
                pm.run("release")
            ));
        }

        sections.push("## License\n\nMIT".to_string());
        format!("{}\n", sections.join("\n\n"))
    }
}
