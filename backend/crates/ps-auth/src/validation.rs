use crate::{AuthError, Result};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Shape check only: exactly one '@', restricted charsets on both sides,
/// and an alphabetic top-level domain of at least two characters.
/// Deliverability is out of scope.
#[track_caller]
pub fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && local.chars().all(is_local_char) && is_valid_domain(domain)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AuthError::invalid_email(email))
    }
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_valid_domain(domain: &str) -> bool {
    // A second '@' lands in the domain and fails the charset check
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty()
        && name.split('.').all(|part| !part.is_empty())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[track_caller]
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::weak_password(MIN_PASSWORD_LEN));
    }
    Ok(())
}
