use std::path::PathBuf;

use clap::{ArgAction, Args};
use eyre::{Context, Result};
use sdkforge_core::{
    DiskFileSystem, GenerationOptions, PackageManager, ProjectContext, ProjectName,
    SystemCommandRunner,
};
use sdkforge_templates::TemplateRegistry;
use tracing::warn;

use crate::{
    ops::{self, materialize::MaterializeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    /// Name of the project; also the directory and package name
    pub name: String,

    /// Generate a TypeScript project (the only supported layout)
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub typescript: bool,

    /// Initialize a git repository and write a .gitignore
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub git: bool,

    /// Include an ERC-20 ABI and typechain scaffolding for contract bindings
    #[arg(long)]
    pub contracts: bool,

    /// Include changesets configuration for release management
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub versioning: bool,

    /// Add shared test configuration and helpers under test/config
    #[arg(long)]
    pub extended_tests: bool,

    /// Start from an empty entry point instead of the client example
    #[arg(long)]
    pub bare: bool,

    /// Package manager used for scripts and dependency installation
    #[arg(short, long, default_value_t = PackageManager::Pnpm)]
    pub package_manager: PackageManager,

    /// Do not install dependencies after generating
    #[arg(long)]
    pub skip_install: bool,

    /// Preview the generated files without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Directory to create the project in (defaults to current directory)
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        let name = ProjectName::new(self.name.as_str())?;
        let ctx = ProjectContext::new(name, self.generation_options());
        let registry = TemplateRegistry::builtin();
        let base_dir = match &self.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().wrap_err("Failed to read current directory")?,
        };

        let mut out = TerminalOutput::new();

        if self.dry_run {
            ops::preview(&ctx, &registry, &base_dir).render(&mut out);
            return Ok(());
        }

        let mut report = ops::materialize(
            &ctx,
            &registry,
            MaterializeOptions {
                base_dir: &base_dir,
                install: !self.skip_install,
            },
            &mut DiskFileSystem,
            &mut SystemCommandRunner,
        )
        .wrap_err_with(|| format!("Failed to create project '{}'", ctx.name))?;

        report.outside_cwd = self.directory.is_some();
        report.render(&mut out);
        Ok(())
    }

    pub fn generation_options(&self) -> GenerationOptions {
        if !self.typescript {
            warn!("JavaScript-only projects are not supported, generating TypeScript");
        }

        GenerationOptions {
            use_typescript: true,
            init_git: self.git,
            include_contract_bindings: self.contracts,
            versioning: self.versioning,
            extended_tests: self.extended_tests,
            example_source: !self.bare,
            package_manager: self.package_manager,
        }
    }
}
