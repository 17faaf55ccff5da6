use std::sync::LazyLock;

use regex::{NoExpand, Regex};

static NAME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{\{\s*name\s*\}\}").expect("valid merge token pattern"));

/// Replaces every `{{ name }}` merge token (any case, any inner whitespace) with the trimmed name.
pub fn render_message(template: &str, full_name: &str) -> String {
    NAME_TOKEN
        .replace_all(template, NoExpand(full_name.trim()))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_all_tokens() {
        let rendered = render_message("Hi {{name}}! Bye {{name}}.", "Alex");
        assert_eq!(rendered, "Hi Alex! Bye Alex.");
    }

    #[test]
    fn test_render_is_case_and_whitespace_tolerant() {
        assert_eq!(
            render_message("Hi {{ Name }}, welcome!", "Alex Johnson"),
            "Hi Alex Johnson, welcome!"
        );
        assert_eq!(render_message("{{NAME}}|{{\tname  }}", "Jo"), "Jo|Jo");
    }

    #[test]
    fn test_render_trims_name() {
        assert_eq!(render_message("Hello {{name}}", "  Jamie  "), "Hello Jamie");
    }

    #[test]
    fn test_render_without_token_is_identity() {
        let template = "Thanks for registering, we'll be in touch.";
        assert_eq!(render_message(template, "Alex"), template);
    }

    #[test]
    fn test_render_leaves_other_tokens() {
        assert_eq!(
            render_message("{{first_name}} {name} {{ name", "Alex"),
            "{{first_name}} {name} {{ name"
        );
    }

    #[test]
    fn test_render_does_not_expand_dollar_in_name() {
        assert_eq!(render_message("Hi {{name}}", "$1 Bob"), "Hi $1 Bob");
    }
}
