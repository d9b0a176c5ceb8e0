use crate::post::post_model::PostInput;
use crate::utils::error::ErrorMap;
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_TEXT_CHARS: usize = 300;
pub const MAX_NAME_CHARS: usize = 50;

static AVATAR_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/?#]+(?:[/?#]\S*)?$").expect("avatar url pattern compiles")
});

pub struct ValidationOutcome {
    pub errors: ErrorMap,
    pub is_valid: bool,
}

/// Validate a post or comment body. Shared by both routes.
pub fn validate_post_input(input: &PostInput) -> ValidationOutcome {
    let mut errors = ErrorMap::new();

    let text = input.text.as_deref().unwrap_or("").trim();
    if text.is_empty() {
        errors.insert("text".into(), "Text field is required".into());
    } else if text.chars().count() > MAX_TEXT_CHARS {
        errors.insert(
            "text".into(),
            format!("Post must not exceed {} characters", MAX_TEXT_CHARS),
        );
    }

    if let Some(name) = input.name.as_deref() {
        if name.chars().count() > MAX_NAME_CHARS {
            errors.insert(
                "name".into(),
                format!("Name must not exceed {} characters", MAX_NAME_CHARS),
            );
        }
    }

    if let Some(avatar) = input.avatar.as_deref() {
        if !AVATAR_URL.is_match(avatar.trim()) {
            errors.insert("avatar".into(), "Avatar must be a valid URL".into());
        }
    }

    let is_valid = errors.is_empty();
    ValidationOutcome { errors, is_valid }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: Option<&str>, name: Option<&str>, avatar: Option<&str>) -> PostInput {
        PostInput {
            text: text.map(String::from),
            name: name.map(String::from),
            avatar: avatar.map(String::from),
        }
    }

    #[test]
    fn accepts_short_post_with_bare_host_avatar() {
        let outcome = validate_post_input(&input(Some("hello"), Some("A"), Some("http://x")));
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn missing_or_blank_text_is_required() {
        for text in [None, Some(""), Some("   ")] {
            let outcome = validate_post_input(&input(text, None, None));
            assert!(!outcome.is_valid);
            assert_eq!(outcome.errors["text"], "Text field is required");
        }
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        let at_limit = "é".repeat(MAX_TEXT_CHARS);
        assert!(validate_post_input(&input(Some(&at_limit), None, None)).is_valid);

        let over = "a".repeat(MAX_TEXT_CHARS + 1);
        let outcome = validate_post_input(&input(Some(&over), None, None));
        assert_eq!(outcome.errors["text"], "Post must not exceed 300 characters");
    }

    #[test]
    fn name_is_optional_and_only_length_capped() {
        for name in [None, Some(""), Some("   ")] {
            assert!(validate_post_input(&input(Some("hi"), name, None)).is_valid);
        }

        let at_limit = "n".repeat(MAX_NAME_CHARS);
        assert!(validate_post_input(&input(Some("hi"), Some(&at_limit), None)).is_valid);
    }

    #[test]
    fn reports_every_invalid_field() {
        let long_name = "n".repeat(MAX_NAME_CHARS + 1);
        let outcome =
            validate_post_input(&input(None, Some(&long_name), Some("ftp://files.example")));

        assert!(!outcome.is_valid);
        let keys: Vec<&str> = outcome.errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["avatar", "name", "text"]);
    }

    #[test]
    fn avatar_urls() {
        for ok in [
            "https://www.gravatar.com/avatar/abc?s=200&r=pg&d=mm",
            "http://localhost:3000/img.png",
        ] {
            assert!(validate_post_input(&input(Some("hi"), None, Some(ok))).is_valid, "{ok}");
        }
        for bad in ["gravatar.com/avatar", "https://", "http://has space.com"] {
            assert!(!validate_post_input(&input(Some("hi"), None, Some(bad))).is_valid, "{bad}");
        }
    }
}
