use std::borrow::Cow;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render a fragment only when the value is present.
pub fn when<T, F>(value: Option<T>, render: F) -> String
where
    F: FnOnce(T) -> String,
{
    value.map(render).unwrap_or_default()
}

/// A titled `<pre>` panel, the block used for prompt, response and judge output.
pub fn pre_panel(title: &str, body: &str, class: &str) -> String {
    format!(
        r#"<div class="{class}">
    <h6>{title}:</h6>
    <pre class="bg-light p-3 border rounded">{body}</pre>
</div>"#,
        class = class,
        title = title,
        body = escape(body),
    )
}

/// A `<li>` metric line. `value` is inserted as-is and must already be escaped.
pub fn metric(label: &str, value: &str) -> String {
    format!("<li><strong>{}:</strong> {}</li>", label, value)
}
