//! Masking helpers so tokens and addresses never reach logs in full

/// Number of trailing characters left visible by [`mask_token`]
const VISIBLE_TOKEN_CHARS: usize = 4;

/// Mask a verification token for logging
///
/// Shows only the last 4 characters. Tokens of 4 characters or fewer are
/// masked completely.
///
/// # Example
///
/// ```
/// use ev_shared::utils::mask_token;
/// assert_eq!(mask_token("abc123xyz"), "*****3xyz");
/// ```
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= VISIBLE_TOKEN_CHARS {
        return "*".repeat(len);
    }

    let masked_count = len - VISIBLE_TOKEN_CHARS;
    let tail: String = token.chars().skip(masked_count).collect();
    format!("{}{}", "*".repeat(masked_count), tail)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain.
///
/// # Example
///
/// ```
/// use ev_shared::utils::mask_email;
/// assert_eq!(mask_email("student@example.org"), "s******@example.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match chars.next() {
                Some(first) => format!("{}{}@{}", first, "*".repeat(chars.count()), domain),
                None => format!("@{}", domain),
            }
        }
        None => mask_token(email),
    }
}
