use sha2::{Digest, Sha256};

/// Дайджест, с которым сверялся пароль администратора при ручной проверке.
/// Не совпадает с SHA-256 от `admin123`; хранится как есть.
pub const REFERENCE_DIGEST: &str =
    "ed0cb90bdfa4f93981a7d03cff99213a30193eea67ed7a65f6f30e61a0781d2d";

/// SHA-256 в нижнем регистре, 64 hex-символа
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Результат сверки пароля с ожидаемым дайджестом
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashCheck {
    pub password: String,
    pub computed: String,
    pub expected: String,
}

impl HashCheck {
    pub fn new(password: impl Into<String>, expected: impl Into<String>) -> Self {
        let password = password.into();
        let computed = sha256_hex(&password);
        Self {
            password,
            computed,
            expected: expected.into(),
        }
    }

    /// Сравнение без учёта регистра hex-цифр
    pub fn matches(&self) -> bool {
        self.computed.eq_ignore_ascii_case(self.expected.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN123_SHA256: &str =
        "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";

    #[test]
    fn test_known_digest() {
        assert_eq!(sha256_hex("admin123"), ADMIN123_SHA256);
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_is_deterministic_hex() {
        let first = sha256_hex("admin123");
        let second = sha256_hex("admin123");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_reference_digest_does_not_match() {
        let check = HashCheck::new("admin123", REFERENCE_DIGEST);
        assert_eq!(check.computed, ADMIN123_SHA256);
        assert!(!check.matches());
    }

    #[test]
    fn test_match_ignores_case() {
        let check = HashCheck::new("admin123", ADMIN123_SHA256.to_uppercase());
        assert!(check.matches());
    }
}
