use rand::seq::SliceRandom;
use rand::Rng;

/// Platform limit on post length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 280;

const ELLIPSIS: &str = "...";

const PREFIXES: &[&str] = &["🚀", "📢", "🔥", "💡", "🎯", "🧠"];

const TEMPLATES: &[&str] = &[
    "{prefix} {title} {url}",
    "{prefix} Check this out: {title} {url}",
    "{prefix} New resource: {title} {url}",
    "{prefix} Just found: {title} {url}",
    "{prefix} Insight drop: {title} {url}",
];

/// Build a promotional message from a randomly chosen prefix and template.
pub fn compose<R: Rng>(title: &str, url: &str, rng: &mut R) -> String {
    let prefix = PREFIXES.choose(rng).copied().unwrap_or_default();
    let template = TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0]);
    render(template, prefix, title, url)
}

/// Fill a template and bound the result to [`MAX_MESSAGE_CHARS`].
///
/// Placeholders are substituted in a single pass, so braces inside the
/// title or URL are copied verbatim.
pub fn render(template: &str, prefix: &str, title: &str, url: &str) -> String {
    let mut text = String::with_capacity(template.len() + title.len() + url.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        text.push_str(&rest[..start]);
        let tail = &rest[start..];
        let (value, len) = if tail.starts_with("{prefix}") {
            (prefix, "{prefix}".len())
        } else if tail.starts_with("{title}") {
            (title.trim(), "{title}".len())
        } else if tail.starts_with("{url}") {
            (url, "{url}".len())
        } else {
            ("{", 1)
        };
        text.push_str(value);
        rest = &tail[len..];
    }
    text.push_str(rest);

    truncate(text.trim())
}

/// Cut to `MAX_MESSAGE_CHARS - 3` characters and append "..." when too long.
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_MESSAGE_CHARS {
        return text.to_string();
    }

    let keep = MAX_MESSAGE_CHARS - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_render_fills_placeholders() {
        let text = render(
            "{prefix} New resource: {title} {url}",
            "🔥",
            "  Agents 101 ",
            "https://a.com/x",
        );
        assert_eq!(text, "🔥 New resource: Agents 101 https://a.com/x");
    }

    #[test]
    fn test_placeholders_in_title_are_kept_verbatim() {
        let text = render("{prefix} {title} {url}", "🚀", "Why {url} and {prefix} matter", "https://a.com/x");
        assert_eq!(text, "🚀 Why {url} and {prefix} matter https://a.com/x");
    }

    #[test]
    fn test_short_message_untouched() {
        assert_eq!(truncate("hello"), "hello");
    }

    #[test]
    fn test_exactly_max_is_untouched() {
        let text = "a".repeat(MAX_MESSAGE_CHARS);
        assert_eq!(truncate(&text), text);
    }

    #[test]
    fn test_long_message_truncated_with_ellipsis() {
        let text = truncate(&"a".repeat(400));
        assert_eq!(text.chars().count(), MAX_MESSAGE_CHARS);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn test_truncation_is_char_safe() {
        let text = truncate(&"é🧠".repeat(300));
        assert_eq!(text.chars().count(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_compose_never_exceeds_limit() {
        let mut rng = StdRng::seed_from_u64(42);
        let long_title = "Very long title ".repeat(40);
        for title in ["", "Short", long_title.as_str()] {
            for _ in 0..20 {
                let text = compose(title, "https://example.com/a/very/long/path", &mut rng);
                assert!(text.chars().count() <= MAX_MESSAGE_CHARS);
            }
        }
    }

    #[test]
    fn test_compose_uses_known_prefix() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = compose("Title", "https://a.com", &mut rng);
        assert!(PREFIXES.iter().any(|p| text.starts_with(p)));
        assert!(text.ends_with("https://a.com"));
    }
}
