//! Embedded test UIs served at `/`.
//!
//! Presentation glue only: minimal single-page forms that exercise the API
//! from a browser. Both services run fully headless with `--api-only`, so
//! nothing here is load-bearing.

/// Interactive page for the Normalizer.
pub const JSON_FORMATTER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>JSON Formatter &amp; Validator</title>
<style>
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
           max-width: 1100px; margin: 30px auto; padding: 0 20px; color: #333; }
    h1 { color: #2c3e50; }
    .panes { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
    textarea { width: 100%; height: 380px; padding: 10px; font-family: monospace;
               font-size: 13px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box; }
    .controls { margin: 12px 0; display: flex; gap: 12px; align-items: center; }
    input[type=number] { width: 60px; padding: 6px; }
    button { padding: 8px 20px; border: none; border-radius: 5px; cursor: pointer;
             background: #2c6bed; color: white; font-size: 14px; }
    button:hover { background: #1d53c2; }
    #message { padding: 10px; border-radius: 5px; display: none; margin-top: 10px; }
    #message.error { display: block; background: #fdecea; color: #c62828; }
    #message.ok { display: block; background: #e8f5e9; color: #2e7d32; }
</style>
</head>
<body>
<h1>JSON Formatter &amp; Validator</h1>
<p>Paste JSON-like text (single quotes are converted to double quotes) and format it.</p>
<div class="panes">
    <div>
        <textarea id="input" placeholder="{'name': 'Ada', 'age': 36}"></textarea>
        <div class="controls">
            <label for="indent">Indent:</label>
            <input type="number" id="indent" value="4" min="0" max="8">
            <button onclick="formatJson()">Format &amp; Validate</button>
        </div>
        <div id="message"></div>
    </div>
    <div>
        <textarea id="output" readonly placeholder="Formatted JSON appears here"></textarea>
    </div>
</div>
<script>
async function formatJson() {
    const text = document.getElementById('input').value;
    const indent = parseInt(document.getElementById('indent').value, 10);
    const msg = document.getElementById('message');
    const out = document.getElementById('output');
    msg.className = '';
    out.value = '';
    const response = await fetch('/api/format', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ text: text, indent: indent })
    });
    const data = await response.json();
    if (data.success) {
        out.value = data.formatted;
        msg.textContent = 'Valid JSON';
        msg.className = 'ok';
    } else {
        let detail = data.error;
        if (data.error_line) {
            detail += ' (line ' + data.error_line + ', column ' + data.error_column + ')';
        }
        msg.textContent = detail;
        msg.className = 'error';
    }
}
</script>
</body>
</html>
"#;

/// Interactive page for the Renderer.
pub const MARKDOWN_CONVERTER_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Markdown Converter</title>
<style>
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
           max-width: 860px; margin: 30px auto; padding: 0 20px; color: #333; }
    h1 { color: #2c3e50; }
    section { border: 1px solid #ddd; border-radius: 6px; padding: 18px; margin: 18px 0; }
    textarea { width: 100%; height: 220px; padding: 10px; font-family: monospace;
               font-size: 13px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box; }
    .row { margin: 10px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap; }
    select, input[type=text] { padding: 6px; }
    button { padding: 8px 20px; border: none; border-radius: 5px; cursor: pointer;
             background: #2c6bed; color: white; font-size: 14px; }
    button:hover { background: #1d53c2; }
    #message { color: #c62828; }
</style>
</head>
<body>
<h1>Markdown Converter</h1>
<p>Convert Markdown to a styled HTML document or a PDF.</p>

<section>
    <h3>Paste content</h3>
    <textarea id="content" placeholder="# Hello&#10;&#10;Write some *markdown* here."></textarea>
    <div class="row">
        <label>Format:
            <select id="pasteFormat"><option value="html">HTML</option><option value="pdf">PDF</option></select>
        </label>
        <label>Title: <input type="text" id="title" placeholder="Document"></label>
        <button onclick="convertPaste()">Convert</button>
    </div>
</section>

<section>
    <h3>Upload a file</h3>
    <div class="row">
        <input type="file" id="file" accept=".md,.markdown,.txt">
        <label>Format:
            <select id="uploadFormat"><option value="html">HTML</option><option value="pdf">PDF</option></select>
        </label>
        <button onclick="convertUpload()">Upload &amp; Convert</button>
    </div>
</section>

<p id="message"></p>

<script>
async function download(response, fallbackName) {
    if (!response.ok) {
        const data = await response.json().catch(() => ({ error: response.statusText }));
        document.getElementById('message').textContent = data.error;
        return;
    }
    document.getElementById('message').textContent = '';
    const blob = await response.blob();
    const url = window.URL.createObjectURL(blob);
    const a = document.createElement('a');
    a.href = url;
    a.download = fallbackName;
    a.click();
    window.URL.revokeObjectURL(url);
}

async function convertPaste() {
    const format = document.getElementById('pasteFormat').value;
    const params = new URLSearchParams();
    params.set('content', document.getElementById('content').value);
    params.set('output_format', format);
    params.set('title', document.getElementById('title').value);
    const response = await fetch('/convert/paste', { method: 'POST', body: params });
    await download(response, 'document.' + format);
}

async function convertUpload() {
    const file = document.getElementById('file').files[0];
    if (!file) {
        document.getElementById('message').textContent = 'Choose a file first.';
        return;
    }
    const format = document.getElementById('uploadFormat').value;
    const form = new FormData();
    form.append('file', file);
    form.append('output_format', format);
    const response = await fetch('/convert/upload', { method: 'POST', body: form });
    await download(response, 'converted.' + format);
}
</script>
</body>
</html>
"##;
