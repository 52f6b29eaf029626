//! Embedded HTML pages.

/// The submission form, served verbatim on `GET /`.
pub const FORM_HTML: &str = include_str!("../templates/form.html");

const SUCCESS_HTML: &str = include_str!("../templates/success.html");

/// Render the confirmation page linking to the created application.
pub fn success_page(application_url: &str) -> String {
    SUCCESS_HTML.replace("{{application_url}}", &escape(application_url))
}

/// Minimal HTML escaping for values substituted into a template.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
