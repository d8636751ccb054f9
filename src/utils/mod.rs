use bcrypt::{DEFAULT_COST, hash};
use rand::Rng;

const INVITE_CODE_PREFIX: &str = "FA-";

/// Generates a shareable `FA-<4 digits>` invite code.
///
/// Codes are drawn from 9000 values and are not checked for uniqueness.
pub fn generate_invite_code() -> String {
    let number: u16 = rand::rng().random_range(1000..=9999);
    format!("{}{}", INVITE_CODE_PREFIX, number)
}

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), DEFAULT_COST)
}

#[cfg(test)]
pub(crate) fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password.as_bytes(), hash)
}

#[cfg(test)]
pub(crate) fn is_invite_code(code: &str) -> bool {
    code.strip_prefix(INVITE_CODE_PREFIX)
        .is_some_and(|digits| digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()))
}
