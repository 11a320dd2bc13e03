/// Trait for types that represent a generated project file
pub trait GeneratedFile {
    /// Path relative to the project root, using `/` as separator
    fn path(&self) -> &str;

    /// Render the file content
    fn render(&self) -> String;
}
