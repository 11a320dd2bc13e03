//! Output trait for rendering reports.

use super::style::Style;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render the line announcing a created project.
    fn created(&mut self, name: &str, path: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a numbered list item holding a shell command.
    fn numbered_command(&mut self, index: usize, command: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn created(&mut self, name: &str, path: &str) {
        println!(
            "{} Created {} in {}",
            Style::Success.paint("✓"),
            name,
            Style::Path.paint(path)
        );
    }

    fn section(&mut self, name: &str) {
        println!("{}", Style::Heading.paint(format!("{}:", name)));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn numbered_command(&mut self, index: usize, command: &str) {
        println!("  {}. {}", index, Style::Command.paint(command));
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn divider(&mut self, label: &str) {
        println!("{}", Style::Divider.paint(format!("── {} ──", label)));
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Output that records rendered lines as plain text.
#[cfg(test)]
#[derive(Default)]
pub struct PlainOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl PlainOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for PlainOutput {
    fn created(&mut self, name: &str, path: &str) {
        self.lines.push(format!("✓ Created {} in {}", name, path));
    }

    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn numbered_command(&mut self, index: usize, command: &str) {
        self.lines.push(format!("  {}. {}", index, command));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
