//! HTML comparison report
//!
//! Pure formatting over a `ComparisonResult`: counts for all four
//! categories, the full corrupted list, and the execution log captured by
//! the caller. Not part of the comparison engine itself.

use crate::compare::ComparisonResult;
use crate::error::IntactError;
use std::path::Path;

/// Render a comparison result as a standalone HTML document.
///
/// `label1` and `label2` name the two baselines; `log_text` is the
/// caller's textual execution log. All interpolated text is HTML-escaped.
pub fn render_html(
    result: &ComparisonResult,
    label1: &str,
    label2: &str,
    log_text: &str,
) -> String {
    let corrupted_items: String = result
        .corrupted
        .iter()
        .map(|path| format!("<li>{}</li>", escape(path)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Baseline comparison report</title>
<style>
body {{ font-family: Arial, sans-serif; background:#f0f0f0; }}
.section {{ background:white; margin:20px; padding:20px; border-radius:8px; }}
ul, pre {{ font-family: Consolas, monospace; }}
</style>
</head>
<body>

<div class="section">
<h1>Baseline comparison report</h1>
<p><b>Baseline 1:</b> {label1}</p>
<p><b>Baseline 2:</b> {label2}</p>
</div>

<div class="section">
<p>Identical files: {identical}</p>
<p>Corrupted files: {corrupted}</p>
<p>Missing files: {missing}</p>
<p>Extra files: {extra}</p>
</div>

<div class="section">
<h2>Corrupted files</h2>
<ul>
{corrupted_items}
</ul>
</div>

<div class="section">
<h2>Execution log</h2>
<pre>{log}</pre>
</div>

</body>
</html>
"#,
        label1 = escape(label1),
        label2 = escape(label2),
        identical = result.identical,
        corrupted = result.corrupted.len(),
        missing = result.missing.len(),
        extra = result.extra.len(),
        corrupted_items = corrupted_items,
        log = escape(log_text),
    )
}

/// Render and write the report to `output_path`.
pub fn write_html_report(
    output_path: &Path,
    result: &ComparisonResult,
    label1: &str,
    label2: &str,
    log_text: &str,
) -> Result<(), IntactError> {
    let html = render_html(result, label1, label2, log_text);
    std::fs::write(output_path, html).map_err(|source| IntactError::Report {
        path: output_path.to_path_buf(),
        source,
    })
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
