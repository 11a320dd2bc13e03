//! Materialize command report data structures.

use std::path::PathBuf;

use sdkforge_core::PackageManager;

use super::output::{Output, Report};

/// Report data from creating a project.
#[derive(Debug)]
pub struct MaterializeReport {
    /// Project name.
    pub name: String,
    /// Project root directory.
    pub root: PathBuf,
    /// Package manager the project was set up for.
    pub package_manager: PackageManager,
    /// Number of directories created, including the root.
    pub directory_count: usize,
    /// Relative paths of written files, in write order.
    pub files: Vec<String>,
    /// Commands run after writing files.
    pub commands: Vec<String>,
    /// Whether dependencies were installed.
    pub installed: bool,
    /// Whether the project was created outside the working directory, in
    /// which case next steps `cd` into the full root path.
    pub outside_cwd: bool,
}

impl MaterializeReport {
    /// Commands the user runs next, in order.
    pub fn next_steps(&self) -> Vec<String> {
        let pm = self.package_manager;
        let target = if self.outside_cwd {
            self.root.display().to_string()
        } else {
            self.name.clone()
        };
        let mut steps = vec![format!("cd {}", target)];
        if !self.installed {
            steps.push(format!("{} install", pm));
        }
        steps.push(pm.run("build"));
        steps.push(pm.run("test"));
        steps
    }
}

impl Report for MaterializeReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.created(&self.name, &self.root.display().to_string());
        out.key_value(
            "Generated",
            &format!(
                "{} files in {} directories",
                self.files.len(),
                self.directory_count
            ),
        );

        if !self.commands.is_empty() {
            out.newline();
            out.section("Ran");
            for command in &self.commands {
                out.list_item(command);
            }
        }

        out.newline();
        out.section("Next steps");
        for (i, step) in self.next_steps().iter().enumerate() {
            out.numbered_command(i + 1, step);
        }
    }
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    /// Directory the project would be created in.
    pub root: PathBuf,
    /// Subdirectories that would be created.
    pub directories: Vec<String>,
    /// Files that would be written.
    pub files: Vec<PreviewFile>,
    /// Whether `git init` would run.
    pub init_git: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative file path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(file.content.trim_end());
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} directories and {} files would be created in {}",
            self.directories.len() + 1,
            self.files.len(),
            self.root.display()
        ));
        if self.init_git {
            out.preformatted("A git repository would be initialized");
        }
    }
}
