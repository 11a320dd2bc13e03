//! Generation options.

use std::{fmt, str::FromStr};

use crate::ProjectName;

/// Package manager used for scripts, documentation and dependency installation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    #[default]
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Returns the executable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Command line that runs a package.json script (e.g. `pnpm run build`).
    pub fn run(&self, script: &str) -> String {
        match self {
            PackageManager::Yarn => format!("yarn {}", script),
            other => format!("{} run {}", other.as_str(), script),
        }
    }

    /// Command line that adds a dependency (e.g. `pnpm add my-sdk`).
    pub fn add(&self, package: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm install {}", package),
            other => format!("{} add {}", other.as_str(), package),
        }
    }

    /// Command line that runs a locally installed binary (e.g. `pnpm exec changeset`).
    pub fn exec(&self, binary: &str) -> String {
        match self {
            PackageManager::Npm => format!("npx {}", binary),
            PackageManager::Pnpm => format!("pnpm exec {}", binary),
            PackageManager::Yarn => format!("yarn {}", binary),
            PackageManager::Bun => format!("bunx {}", binary),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            _ => Err(format!(
                "unknown package manager '{}', expected 'npm', 'pnpm', 'yarn' or 'bun'",
                s
            )),
        }
    }
}

/// Flags controlling which template variants are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Always true; there is no JavaScript-only layout.
    pub use_typescript: bool,
    /// Emit `.gitignore` and initialize a repository.
    pub init_git: bool,
    /// Emit ABI and typechain scaffolding for smart-contract bindings.
    pub include_contract_bindings: bool,
    /// Emit changesets configuration for release management.
    pub versioning: bool,
    /// Emit shared test configuration and helpers under `test/config`.
    pub extended_tests: bool,
    /// Ship a client-creation example instead of an empty entry point.
    pub example_source: bool,
    pub package_manager: PackageManager,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            use_typescript: true,
            init_git: true,
            include_contract_bindings: false,
            versioning: true,
            extended_tests: false,
            example_source: true,
            package_manager: PackageManager::default(),
        }
    }
}

/// Everything a template may depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: ProjectName,
    pub options: GenerationOptions,
}

impl ProjectContext {
    pub fn new(name: ProjectName, options: GenerationOptions) -> Self {
        Self { name, options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerationOptions::default();
        assert!(options.use_typescript);
        assert!(options.init_git);
        assert!(!options.include_contract_bindings);
        assert!(options.versioning);
        assert!(!options.extended_tests);
        assert!(options.example_source);
        assert_eq!(options.package_manager, PackageManager::Pnpm);
    }

    #[test]
    fn test_package_manager_from_str() {
        assert_eq!(PackageManager::from_str("npm").unwrap(), PackageManager::Npm);
        assert_eq!(PackageManager::from_str("PNPM").unwrap(), PackageManager::Pnpm);
        assert_eq!(PackageManager::from_str("yarn").unwrap(), PackageManager::Yarn);
        assert_eq!(PackageManager::from_str("bun").unwrap(), PackageManager::Bun);
        assert!(PackageManager::from_str("cargo").is_err());
    }

    #[test]
    fn test_package_manager_commands() {
        assert_eq!(PackageManager::Npm.run("build"), "npm run build");
        assert_eq!(PackageManager::Yarn.run("build"), "yarn build");
        assert_eq!(PackageManager::Bun.run("build:esm"), "bun run build:esm");
        assert_eq!(PackageManager::Npm.add("my-sdk"), "npm install my-sdk");
        assert_eq!(PackageManager::Pnpm.add("my-sdk"), "pnpm add my-sdk");
        assert_eq!(PackageManager::Npm.exec("changeset"), "npx changeset");
        assert_eq!(PackageManager::Bun.exec("changeset"), "bunx changeset");
    }
}
