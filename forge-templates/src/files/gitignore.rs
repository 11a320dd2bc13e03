//! .gitignore generator.

use sdkforge_core::{GeneratedFile, ProjectContext};

use crate::paths;

const BASE: &str = r#"# Dependencies
node_modules/

# Build output
dist/
docs/
*.tsbuildinfo

# Test output
coverage/

# Environment
.env
.env.local
.env.*.local

# IDE
.idea/
.vscode/
*.swp
*.swo

# OS
.DS_Store
Thumbs.db

# Debug
*.log
"#;

/// The .gitignore file.
pub struct GitIgnore {
    contract_bindings: bool,
}

impl GitIgnore {
    pub fn new(ctx: &ProjectContext) -> Self {
        Self {
            contract_bindings: ctx.options.include_contract_bindings,
        }
    }
}

impl GeneratedFile for GitIgnore {
    fn path(&self) -> &str {
        paths::GITIGNORE
    }

    fn render(&self) -> String {
        let mut content = BASE.to_string();
        if self.contract_bindings {
            content.push_str("\n# Generated contract bindings\ntypechain/contracts/\n");
        }
        content
    }
}

#[cfg(test)]
mod tests {
    use sdkforge_core::{GenerationOptions, ProjectName};

    use super::*;

    fn render(include_contract_bindings: bool) -> String {
        let options = GenerationOptions {
            include_contract_bindings,
            ..Default::default()
        };
        GitIgnore::new(&ProjectContext::new(
            ProjectName::new("x").unwrap(),
            options,
        ))
        .render()
    }

    #[test]
    fn test_extra_pattern_only_with_bindings() {
        let plain = render(false);
        let with_bindings = render(true);

        assert!(!plain.contains("typechain/contracts/"));
        assert!(with_bindings.starts_with(&plain));
        assert!(with_bindings.ends_with("typechain/contracts/\n"));
    }
}
