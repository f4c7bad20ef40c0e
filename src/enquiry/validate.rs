//! Field checks shared by the enquiry forms.

/// Loose shape check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

pub(crate) fn require_text(field: &str, value: &str, problems: &mut Vec<String>) {
    if value.trim().is_empty() {
        problems.push(format!("{field} is required"));
    }
}

pub(crate) fn require_email(value: &str, problems: &mut Vec<String>) {
    if !is_plausible_email(value) {
        problems.push("email is not a valid address".to_string());
    }
}
