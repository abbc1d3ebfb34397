//! Name normalisation.
//!
//! Every derived identifier in a generated artefact comes from one of these
//! functions. They are total: any input string produces some output, and
//! rejecting degenerate names is left to [`TemplateData`].
//!
//! | Function         | `"User-Profile"` | `"user_profile"` |
//! |------------------|------------------|------------------|
//! | `sanitize`       | `user_profile`   | `user_profile`   |
//! | `to_pascal`      | `UserProfile`    | `UserProfile`    |
//! | `to_snake`       | `user_profile`   | `user_profile`   |
//!
//! `to_snake(to_pascal(x))` is not guaranteed to give back `x`: separators
//! other than `_` and upper-case runs do not survive the trip.
//!
//! [`TemplateData`]: crate::domain::TemplateData

/// Trim whitespace, turn hyphens into underscores and lower-case.
pub fn sanitize(raw: &str) -> String {
    raw.trim().replace('-', "_").to_lowercase()
}

/// `user_profile` → `UserProfile`.
///
/// Splits on `_`, `-` and space; empty segments are dropped so doubled
/// separators do not leave artifacts.
pub fn to_pascal(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    let mut word = String::with_capacity(segment.len());
                    word.extend(first.to_uppercase());
                    word.push_str(&chars.as_str().to_lowercase());
                    word
                }
                None => String::new(),
            }
        })
        .collect()
}

/// `UserProfile` → `user_profile`.
///
/// Hyphens become underscores, and every ASCII upper-case letter after the
/// first character gets an underscore in front of it.
pub fn to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.replace('-', "_").chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Lower-case only the first character.
pub fn to_lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_maps_hyphens_and_case() {
        assert_eq!(sanitize("My-Name"), "my_name");
        assert_eq!(sanitize("  Order-Item  "), "order_item");
        assert_eq!(sanitize("user"), "user");
    }

    #[test]
    fn pascal_from_snake() {
        assert_eq!(to_pascal("user_profile"), "UserProfile");
        assert_eq!(to_pascal("user"), "User");
        assert_eq!(to_pascal("order item-line"), "OrderItemLine");
    }

    #[test]
    fn pascal_skips_empty_segments() {
        assert_eq!(to_pascal("user__profile"), "UserProfile");
        assert_eq!(to_pascal("_user_"), "User");
        assert_eq!(to_pascal(""), "");
    }

    #[test]
    fn pascal_lowercases_tail_of_segment() {
        assert_eq!(to_pascal("HTTP_client"), "HttpClient");
    }

    #[test]
    fn snake_from_pascal() {
        assert_eq!(to_snake("UserProfile"), "user_profile");
        assert_eq!(to_snake("User"), "user");
        assert_eq!(to_snake("order-item"), "order_item");
    }

    #[test]
    fn snake_is_identity_on_snake_input() {
        assert_eq!(to_snake("already_snake"), "already_snake");
        assert_eq!(to_snake(&to_snake("already_snake")), "already_snake");
    }

    #[test]
    fn snake_of_pascal_does_not_always_round_trip() {
        assert_eq!(to_snake(&to_pascal("user_profile")), "user_profile");
        assert_eq!(to_snake(&to_pascal("user profile")), "user_profile");
        assert_eq!(to_snake(&to_pascal("HTTP_client")), "http_client");
    }

    #[test]
    fn lower_first_only_touches_first_char() {
        assert_eq!(to_lower_first("UserController"), "userController");
        assert_eq!(to_lower_first("X"), "x");
        assert_eq!(to_lower_first(""), "");
    }
}
