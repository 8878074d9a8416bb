//! Markdown → HTML fragment via comrak.
//!
//! The engine is configured with a fixed feature set and never per-request:
//! GFM tables, strikethrough, task lists, footnotes, auto-generated heading
//! ids, hard line breaks on single newlines, and raw-HTML passthrough.
//! Fenced code blocks and lists cuddled against a preceding paragraph are
//! CommonMark-native and need no flag. The exact HTML comrak emits for a
//! given construct is the engine's contract, not ours — tests below assert
//! presence of the construct, not byte-exact markup.

use comrak::{markdown_to_html, Options};

/// Transform markdown text into an HTML fragment.
pub fn to_fragment(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.header_ids = Some(String::new());
    options.render.hardbreaks = true;
    options.render.unsafe_ = true;
    markdown_to_html(markdown, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_renders_as_h1_with_id() {
        let html = to_fragment("# My Title");
        assert!(html.contains("<h1"), "got: {html}");
        assert!(html.contains("My Title"), "got: {html}");
        assert!(html.contains("id=\"my-title\""), "got: {html}");
    }

    #[test]
    fn fenced_code_block_renders_as_pre_code() {
        let html = to_fragment("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"), "got: {html}");
        assert!(html.contains("<code"), "got: {html}");
    }

    #[test]
    fn gfm_table_renders_as_table() {
        let html = to_fragment("| Name | Age |\n|------|-----|\n| Ada  | 36  |");
        assert!(html.contains("<table"), "got: {html}");
        assert!(html.contains("<th"), "got: {html}");
        assert!(html.contains("Ada"), "got: {html}");
    }

    #[test]
    fn strikethrough_renders_as_del() {
        let html = to_fragment("~~gone~~");
        assert!(html.contains("<del>gone</del>"), "got: {html}");
    }

    #[test]
    fn task_list_renders_checkboxes() {
        let html = to_fragment("- [x] done\n- [ ] todo");
        assert!(html.contains("type=\"checkbox\""), "got: {html}");
    }

    #[test]
    fn single_newline_becomes_hard_break() {
        let html = to_fragment("first\nsecond");
        assert!(html.contains("<br"), "got: {html}");
    }

    #[test]
    fn footnotes_render_references() {
        let html = to_fragment("text[^1]\n\n[^1]: the note");
        assert!(html.contains("footnote"), "got: {html}");
    }

    #[test]
    fn raw_html_passes_through() {
        let html = to_fragment("before <span class=\"x\">kept</span> after");
        assert!(html.contains("<span class=\"x\">kept</span>"), "got: {html}");
    }

    #[test]
    fn empty_input_yields_empty_fragment() {
        assert_eq!(to_fragment(""), "");
    }
}
