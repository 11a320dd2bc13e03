//! Structured TypeScript file assembly.
//!
//! A [`CodeFile`] is an import section followed by body blocks, rendered
//! with a blank line between the imports and the body and between blocks.

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    namespace: Option<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            namespace: None,
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import the whole module under `alias` (`import * as alias`).
    pub fn namespace(mut self, alias: impl Into<String>) -> Self {
        self.namespace = Some(alias.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn render(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        match (&self.namespace, self.named.is_empty()) {
            (Some(alias), _) => format!("import {}* as {} from \"{}\";", type_kw, alias, self.from),
            (None, false) => format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }
}

/// A TypeScript source file made of imports and body blocks.
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<String>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body block. Surrounding blank lines are normalized on render.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, code: impl Into<String>) -> Self {
        self.body.push(code.into());
        self
    }

    pub fn render(&self) -> String {
        let mut sections = Vec::new();
        if !self.imports.is_empty() {
            sections.push(
                self.imports
                    .iter()
                    .map(Import::render)
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        sections.extend(
            self.body
                .iter()
                .map(|block| block.trim_matches('\n').to_string()),
        );

        if sections.is_empty() {
            return String::new();
        }
        format!("{}\n", sections.join("\n\n"))
    }
}
