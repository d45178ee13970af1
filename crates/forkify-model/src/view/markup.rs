//! Shared indicator fragments used by every view.

/// Escape text for safe insertion into HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// `<svg><use href="{icons}#icon-{name}"></use></svg>`
pub fn icon(icons: &str, name: &str) -> String {
    format!(r#"<svg><use href="{}#icon-{}"></use></svg>"#, icons, name)
}

pub fn spinner(icons: &str) -> String {
    format!(r#"<div class="spinner">{}</div>"#, icon(icons, "loader"))
}

pub fn error(icons: &str, message: &str) -> String {
    indicator("error", &icon(icons, "alert-triangle"), message)
}

pub fn message(icons: &str, message: &str) -> String {
    indicator("message", &icon(icons, "smile"), message)
}

fn indicator(class: &str, icon: &str, message: &str) -> String {
    format!(
        r#"<div class="{}"><div>{}</div><p>{}</p></div>"#,
        class,
        icon,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_error_markup_uses_alert_icon() {
        let html = error("img/icons.svg", "Not found");
        assert!(html.starts_with(r#"<div class="error">"#));
        assert!(html.contains(r#"href="img/icons.svg#icon-alert-triangle""#));
        assert!(html.contains("<p>Not found</p>"));
    }

    #[test]
    fn test_spinner_markup() {
        assert_eq!(
            spinner("i.svg"),
            r#"<div class="spinner"><svg><use href="i.svg#icon-loader"></use></svg></div>"#
        );
    }
}
