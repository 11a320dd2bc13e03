//! Materialize operation - write a planned project to disk.

use std::path::Path;

use sdkforge_core::{CommandRunner, CommandSpec, Error, FileSystem, ProjectContext, Result};
use sdkforge_templates::TemplateRegistry;
use tracing::{debug, info};

use crate::reports::{MaterializeReport, PreviewFile, PreviewReport};

/// Options for the materialize operation.
pub struct MaterializeOptions<'a> {
    /// Directory the project directory is created in.
    pub base_dir: &'a Path,
    /// Whether to install dependencies after writing files.
    pub install: bool,
}

/// Create the project described by `ctx` under `opts.base_dir`.
///
/// Fails before touching the filesystem if the target already exists. Once
/// writing has started, a failure stops the remaining steps but leaves the
/// partially created project in place.
pub fn materialize(
    ctx: &ProjectContext,
    registry: &TemplateRegistry,
    opts: MaterializeOptions,
    fs: &mut dyn FileSystem,
    runner: &mut dyn CommandRunner,
) -> Result<MaterializeReport> {
    let plan = registry.plan(ctx);
    let root = opts.base_dir.join(&plan.name);

    if fs.exists(&root) {
        return Err(Error::DirectoryExists { path: root });
    }

    info!(root = %root.display(), "creating project");
    fs.create_dir(&root)?;

    for dir in &plan.directories {
        fs.create_dir(&root.join(dir))?;
    }

    for file in &plan.files {
        debug!(path = %file.path, "writing file");
        fs.write(&root.join(&file.path), &file.content)?;
    }

    let mut commands = Vec::new();

    if ctx.options.init_git {
        let git = CommandSpec::new("git").arg("init");
        runner.run(&git, &root)?;
        commands.push(git.to_string());
    }

    let package_manager = ctx.options.package_manager;
    if opts.install {
        let install = CommandSpec::new(package_manager.as_str()).arg("install");
        runner.run(&install, &root)?;
        commands.push(install.to_string());
    }

    Ok(MaterializeReport {
        name: plan.name,
        root,
        package_manager,
        directory_count: plan.directories.len() + 1,
        files: plan.files.into_iter().map(|f| f.path).collect(),
        commands,
        installed: opts.install,
        outside_cwd: false,
    })
}

/// Plan the project without writing anything.
pub fn preview(
    ctx: &ProjectContext,
    registry: &TemplateRegistry,
    base_dir: &Path,
) -> PreviewReport {
    let plan = registry.plan(ctx);

    PreviewReport {
        root: base_dir.join(&plan.name),
        directories: plan.directories,
        files: plan
            .files
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect(),
        init_git: ctx.options.init_git,
    }
}
