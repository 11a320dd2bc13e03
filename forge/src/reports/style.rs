//! Terminal styling.

use console::style;

pub enum Style {
    Success,
    Heading,
    Command, // Shell commands and inline code
    Path,
    Divider,
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message = message.as_ref();

        if is_no_color_set() {
            return message.to_string();
        }

        match self {
            Style::Success => style(message).green().bold(),
            Style::Heading | Style::Path => style(message).bold(),
            Style::Command => style(message).yellow(),
            Style::Divider => style(message).dim(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    !matches!(
        std::env::var("NO_COLOR").as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_keeps_text() {
        let painted = Style::Command.paint("pnpm install");
        assert!(painted.contains("pnpm install"));
    }
}
