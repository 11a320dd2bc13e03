//! Template registry and generation plan.
//!
//! Every generated file is registered under a [`TemplateId`] together with a
//! predicate deciding whether it applies to the given options and a function
//! building it from the project context. Planning walks the registry in
//! registration order, so the plan is a pure function of the context.
//!
//! # Example
//!
//! ```
//! use sdkforge_core::{GenerationOptions, ProjectContext, ProjectName};
//! use sdkforge_templates::{TemplateId, TemplateRegistry};
//!
//! let ctx = ProjectContext::new(ProjectName::new("my-sdk")?, GenerationOptions::default());
//! let registry = TemplateRegistry::builtin();
//!
//! let plan = registry.plan(&ctx);
//! assert!(plan.contains("package.json"));
//!
//! let readme = registry.render(TemplateId::Readme, &ctx).unwrap();
//! assert!(readme.content.starts_with("# my-sdk"));
//! # Ok::<(), sdkforge_core::Error>(())
//! ```

use sdkforge_core::{GeneratedFile, GenerationOptions, ProjectContext};

use crate::{
    files::{
        Biome, BuildTarget, ChangesetConfig, Erc20Abi, GitIgnore, IndexTs, PackageJson, Readme,
        SdkTest, TestConfig, TestUtils, TsConfigBase, TsConfigRoot, TsConfigTarget, TypeDoc,
    },
    paths,
};

/// Identifier of a registered template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    TsConfigBase,
    TsConfigEsm,
    TsConfigCjs,
    TsConfigTypes,
    TsConfigRoot,
    PackageJson,
    TypeDoc,
    Biome,
    IndexTs,
    SdkTest,
    TestConfig,
    TestUtils,
    Erc20Abi,
    Readme,
    GitIgnore,
    ChangesetConfig,
}

type BuildFn = Box<dyn Fn(&ProjectContext) -> Box<dyn GeneratedFile>>;

/// A registered template.
pub struct Template {
    id: TemplateId,
    enabled: fn(&GenerationOptions) -> bool,
    build: BuildFn,
}

impl Template {
    pub fn id(&self) -> TemplateId {
        self.id
    }

    /// Whether this template is part of a project generated with `options`.
    pub fn is_enabled(&self, options: &GenerationOptions) -> bool {
        (self.enabled)(options)
    }

    /// Build the file for `ctx`.
    pub fn build(&self, ctx: &ProjectContext) -> Box<dyn GeneratedFile> {
        (self.build)(ctx)
    }

    /// Build and render the file for `ctx`.
    pub fn render(&self, ctx: &ProjectContext) -> FileEntry {
        FileEntry::from_generated(self.build(ctx).as_ref())
    }
}

/// Registry of every template the scaffolder knows about.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with all built-in templates, in generation order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(TemplateId::TsConfigBase, always, |_| TsConfigBase);
        registry.register(TemplateId::TsConfigEsm, always, |_| {
            TsConfigTarget::new(BuildTarget::Esm)
        });
        registry.register(TemplateId::TsConfigCjs, always, |_| {
            TsConfigTarget::new(BuildTarget::Cjs)
        });
        registry.register(TemplateId::TsConfigTypes, always, |_| {
            TsConfigTarget::new(BuildTarget::Types)
        });
        registry.register(TemplateId::TsConfigRoot, always, |_| TsConfigRoot);
        registry.register(TemplateId::PackageJson, always, PackageJson::new);
        registry.register(TemplateId::TypeDoc, always, |_| TypeDoc);
        registry.register(TemplateId::Biome, always, |_| Biome);
        registry.register(TemplateId::IndexTs, always, IndexTs::new);
        registry.register(TemplateId::SdkTest, always, SdkTest::new);
        registry.register(TemplateId::TestConfig, |o| o.extended_tests, |_| TestConfig);
        registry.register(TemplateId::TestUtils, |o| o.extended_tests, |_| TestUtils);
        registry.register(
            TemplateId::Erc20Abi,
            |o| o.include_contract_bindings,
            |_| Erc20Abi,
        );
        registry.register(TemplateId::Readme, always, Readme::new);
        registry.register(TemplateId::GitIgnore, |o| o.init_git, GitIgnore::new);
        registry.register(
            TemplateId::ChangesetConfig,
            |o| o.versioning,
            |_| ChangesetConfig,
        );

        registry
    }

    /// Register a template. Later registrations are generated later.
    pub fn register<F, B>(
        &mut self,
        id: TemplateId,
        enabled: fn(&GenerationOptions) -> bool,
        build: B,
    ) where
        F: GeneratedFile + 'static,
        B: Fn(&ProjectContext) -> F + 'static,
    {
        self.templates.push(Template {
            id,
            enabled,
            build: Box::new(move |ctx: &ProjectContext| -> Box<dyn GeneratedFile> {
                Box::new(build(ctx))
            }),
        });
    }

    /// Look up a template by id.
    pub fn get(&self, id: TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// All registered templates, in registration order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Render a single template regardless of whether the options enable it.
    pub fn render(&self, id: TemplateId, ctx: &ProjectContext) -> Option<FileEntry> {
        self.get(id).map(|t| t.render(ctx))
    }

    /// Compute the full generation plan for `ctx`.
    pub fn plan(&self, ctx: &ProjectContext) -> ProjectPlan {
        let directories = paths::directories(&ctx.options)
            .into_iter()
            .map(String::from)
            .collect();
        let files = self
            .templates
            .iter()
            .filter(|t| t.is_enabled(&ctx.options))
            .map(|t| t.render(ctx))
            .collect();

        ProjectPlan {
            name: ctx.name.to_string(),
            directories,
            files,
        }
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn always(_: &GenerationOptions) -> bool {
    true
}

/// A rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from the project root.
    pub path: String,
    /// File content.
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn from_generated(file: &dyn GeneratedFile) -> Self {
        Self::new(file.path(), file.render())
    }

    /// Directory containing this file, or `None` at the project root.
    pub fn parent_dir(&self) -> Option<&str> {
        self.path.rsplit_once('/').map(|(dir, _)| dir)
    }
}

/// Everything to create for one project, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    /// Project name, also the root directory name.
    pub name: String,
    /// Subdirectories, parents before children.
    pub directories: Vec<String>,
    /// Files in write order.
    pub files: Vec<FileEntry>,
}

impl ProjectPlan {
    /// Relative paths of all planned files.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    /// Look up a planned file.
    pub fn file(&self, path: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Whether a file is planned at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.file(path).is_some()
    }

    /// Whether a directory is planned at `path`.
    pub fn has_directory(&self, path: &str) -> bool {
        self.directories.iter().any(|d| d == path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sdkforge_core::ProjectName;

    use super::*;

    fn ctx(options: GenerationOptions) -> ProjectContext {
        ProjectContext::new(ProjectName::new("my-sdk").unwrap(), options)
    }

    #[test]
    fn test_builtin_registers_every_template_once() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 16);

        let ids: HashSet<_> = registry.templates().map(|t| t.id()).collect();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_template_paths_are_unique() {
        let all = GenerationOptions {
            include_contract_bindings: true,
            extended_tests: true,
            ..Default::default()
        };
        let plan = TemplateRegistry::builtin().plan(&ctx(all));

        let mut paths: Vec<_> = plan.paths().collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), plan.files.len());
    }

    #[test]
    fn test_render_single_template() {
        let registry = TemplateRegistry::builtin();
        let entry = registry
            .render(TemplateId::Erc20Abi, &ctx(GenerationOptions::default()))
            .unwrap();

        assert_eq!(entry.path, "abis/ERC20.json");
        assert_eq!(entry.parent_dir(), Some("abis"));
    }

    #[test]
    fn test_disabled_templates_not_planned() {
        let options = GenerationOptions {
            init_git: false,
            versioning: false,
            ..Default::default()
        };
        let plan = TemplateRegistry::builtin().plan(&ctx(options));

        assert!(!plan.contains(".gitignore"));
        assert!(!plan.contains(".changeset/config.json"));
        assert!(!plan.has_directory(".changeset"));
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = TemplateRegistry::new();
        assert!(registry.is_empty());

        registry.register(TemplateId::Biome, always, |_| Biome);
        let plan = registry.plan(&ctx(GenerationOptions::default()));

        assert_eq!(plan.paths().collect::<Vec<_>>(), vec!["biome.json"]);
        assert!(registry.get(TemplateId::Readme).is_none());
    }

    #[test]
    fn test_root_files_have_no_parent() {
        assert_eq!(FileEntry::new("README.md", "").parent_dir(), None);
        assert_eq!(
            FileEntry::new("tsconfig/esm.json", "").parent_dir(),
            Some("tsconfig")
        );
    }
}
