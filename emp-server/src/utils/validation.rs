//! Input validation helpers
//!
//! Centralized text sanitization and field checks shared by the create and
//! update payloads. All free-text fields are trimmed and HTML-escaped before
//! they reach storage; emails are additionally normalized to lowercase.

use validator::ValidateEmail;

// ── Text length limits ──────────────────────────────────────────────

/// Names, positions, departments
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Sanitization ────────────────────────────────────────────────────

/// HTML-escape the characters `& < > " ' /`.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trim and HTML-escape a free-text field.
pub fn sanitize_text(value: &str) -> String {
    escape_html(value.trim())
}

/// Trim and lowercase an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Syntax check via the `validator` crate (RFC-style email validation).
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LEN && email.validate_email()
}
