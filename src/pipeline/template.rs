//! The fixed document template and its stamping helpers.
//!
//! Every conversion wraps the HTML fragment in the same HTML5 shell: a
//! `<title>`, a styled content container, and a footer stamped with the
//! wall-clock time *of the wrapping step* (not request arrival), formatted
//! `YYYY-MM-DD HH:MM:SS` in the server's local time zone.

use chrono::Local;

/// Footer timestamp format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The document shell. Placeholders: `{title}`, `{content}`, `{timestamp}`.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
        line-height: 1.6;
        color: #333;
        max-width: 800px;
        margin: 0 auto;
        padding: 20px;
        background-color: #f5f5f5;
    }
    .container {
        background-color: white;
        padding: 40px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    h1, h2, h3, h4, h5, h6 {
        color: #2c3e50;
        margin-top: 24px;
        margin-bottom: 16px;
        font-weight: 600;
    }
    h1 { font-size: 2em; border-bottom: 2px solid #eee; padding-bottom: 10px; }
    h2 { font-size: 1.5em; border-bottom: 1px solid #eee; padding-bottom: 8px; }
    code {
        background-color: #f4f4f4;
        padding: 2px 6px;
        border-radius: 3px;
        font-family: 'Courier New', monospace;
        font-size: 0.9em;
    }
    pre {
        background-color: #f6f8fa;
        padding: 16px;
        border-radius: 6px;
        overflow-x: auto;
        border: 1px solid #e1e4e8;
    }
    pre code { background-color: transparent; padding: 0; }
    blockquote {
        border-left: 4px solid #ddd;
        padding-left: 20px;
        margin-left: 0;
        color: #666;
        font-style: italic;
    }
    table { border-collapse: collapse; width: 100%; margin: 20px 0; }
    table th, table td { border: 1px solid #ddd; padding: 12px; text-align: left; }
    table th { background-color: #f2f2f2; font-weight: 600; }
    a { color: #0366d6; text-decoration: none; }
    a:hover { text-decoration: underline; }
    img { max-width: 100%; height: auto; }
    ul, ol { padding-left: 30px; }
    li { margin: 8px 0; }
    hr { border: none; border-top: 2px solid #eee; margin: 30px 0; }
    .footer {
        margin-top: 40px;
        padding-top: 20px;
        border-top: 1px solid #eee;
        color: #666;
        font-size: 0.9em;
        text-align: center;
    }
</style>
</head>
<body>
    <div class="container">
        {content}
        <div class="footer">
            Generated on {timestamp}
        </div>
    </div>
</body>
</html>
"#;

/// Wrap an HTML fragment into the full document.
///
/// The timestamp is computed here, during wrapping. `{content}` is
/// substituted last: document text containing a literal placeholder string
/// must never re-trigger replacement.
pub fn wrap_document(title: &str, fragment: &str) -> String {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    PAGE_TEMPLATE
        .replace("{timestamp}", &timestamp)
        .replace("{title}", &escape_html(title))
        .replace("{content}", fragment)
}

/// Suggested download filename: spaces become underscores, control
/// characters and quotes are dropped so the value is always a valid
/// Content-Disposition token.
pub fn attachment_filename(title: &str, extension: &str) -> String {
    let base: String = title
        .replace(' ', "_")
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();
    format!("{base}.{extension}")
}

/// Minimal HTML escaping for text landing inside the `<title>` element.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_document_contains_title_fragment_and_footer() {
        let doc = wrap_document("Trip Notes", "<h1>Day one</h1>");
        assert!(doc.contains("<title>Trip Notes</title>"), "missing title");
        assert!(doc.contains("<h1>Day one</h1>"), "missing fragment");
        assert!(doc.contains("Generated on "), "missing footer stamp");
        assert!(doc.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn footer_timestamp_has_the_fixed_shape() {
        let doc = wrap_document("T", "x");
        let stamp = doc
            .split("Generated on ")
            .nth(1)
            .and_then(|rest| rest.split('\n').next())
            .map(str::trim)
            .expect("footer present");
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(stamp.len(), 19, "got: {stamp:?}");
        let bytes = stamp.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
    }

    #[test]
    fn content_placeholder_in_user_text_is_not_expanded() {
        let doc = wrap_document("T", "literal {timestamp} stays");
        assert!(doc.contains("literal {timestamp} stays"), "got: {doc}");
    }

    #[test]
    fn title_is_escaped_in_the_head() {
        let doc = wrap_document("a<b>&c", "x");
        assert!(doc.contains("<title>a&lt;b&gt;&amp;c</title>"), "got: {doc}");
    }

    #[test]
    fn filename_replaces_spaces_with_underscores() {
        assert_eq!(attachment_filename("My Trip Notes", "html"), "My_Trip_Notes.html");
        assert_eq!(attachment_filename("Document", "pdf"), "Document.pdf");
    }

    #[test]
    fn filename_strips_header_hostile_characters() {
        assert_eq!(attachment_filename("a\r\nb", "pdf"), "ab.pdf");
        assert_eq!(attachment_filename("say \"hi\"", "html"), "say_hi.html");
    }
}
