//! Include-tag rendering.

use crate::library::FileType;

/// How a tag is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Structural markup, ready to insert into a page.
    #[default]
    Markup,
    /// Angle brackets escaped so the tag shows up as text.
    Debug,
}

/// Renders a `<link>` tag for stylesheets or a `<script>` tag otherwise.
pub fn render_tag(file_type: FileType, url: &str, mode: RenderMode) -> String {
    let (lt, gt) = match mode {
        RenderMode::Markup => ("<", ">"),
        RenderMode::Debug => ("&lt;", "&gt;"),
    };
    match file_type {
        FileType::Stylesheet => format!("{lt}link href='{url}' rel='stylesheet' /{gt}"),
        FileType::Script => format!("{lt}script src='{url}'{gt}{lt}/script{gt}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://ajax.googleapis.com/ajax/libs/jquery/1.11.2/jquery.min.js";

    #[test]
    fn script_tag() {
        assert_eq!(
            render_tag(FileType::Script, URL, RenderMode::Markup),
            format!("<script src='{URL}'></script>")
        );
    }

    #[test]
    fn stylesheet_tag() {
        assert_eq!(
            render_tag(FileType::Stylesheet, "https://x/a.css", RenderMode::Markup),
            "<link href='https://x/a.css' rel='stylesheet' />"
        );
    }

    #[test]
    fn debug_mode_escapes_brackets() {
        assert_eq!(
            render_tag(FileType::Script, URL, RenderMode::Debug),
            format!("&lt;script src='{URL}'&gt;&lt;/script&gt;")
        );
        assert_eq!(
            render_tag(FileType::Stylesheet, "https://x/a.css", RenderMode::Debug),
            "&lt;link href='https://x/a.css' rel='stylesheet' /&gt;"
        );
    }
}
