//! Minimal HTML rendering. Pages are assembled with `format!` into a shared
//! shell; no template engine.

use crate::session::SessionAccount;

/// Escapes text for interpolation into HTML element content or attribute
/// values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps page content in the shared shell with the navigation bar. The nav
/// reflects the session account only; the API re-checks every call.
#[must_use]
pub fn layout(title: &str, account: Option<&SessionAccount>, body: &str) -> String {
    let nav_account = match account {
        Some(acct) => format!(
            r#"<span>Hello, {}</span> <a href="/home/logout">Logout</a>"#,
            escape_html(&acct.username)
        ),
        None => r#"<a href="/home/login">Login</a> <a href="/home/register">Register</a>"#
            .to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Parkside</title>
</head>
<body>
<nav>
<a href="/">Home</a>
<a href="/nationalpark">National Parks</a>
<a href="/trails">Trails</a>
{nav_account}
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// Renders an optional flash message above a form.
#[must_use]
pub fn flash(message: Option<&str>) -> String {
    match message {
        Some(m) => format!(r#"<p class="flash">{}</p>"#, escape_html(m)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkside_core::types::Role;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('1')">&"#),
            "&lt;img src=x onerror=&quot;alert(&#39;1&#39;)&quot;&gt;&amp;"
        );
    }

    #[test]
    fn escape_passes_plain_text_through() {
        assert_eq!(escape_html("Grand Teton"), "Grand Teton");
    }

    #[test]
    fn layout_escapes_username() {
        let account = SessionAccount {
            username: "<script>".to_string(),
            role: Role::User,
        };
        let html = layout("Home", Some(&account), "<p>body</p>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn layout_shows_login_links_when_signed_out() {
        let html = layout("Home", None, "");
        assert!(html.contains("/home/login"));
        assert!(html.contains("/home/register"));
        assert!(!html.contains("/home/logout"));
    }
}
