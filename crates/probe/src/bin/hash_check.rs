//! Сверка SHA-256 пароля администратора с записанным дайджестом.

use login_probe::probe::{report, HashCheck, REFERENCE_DIGEST};

const PASSWORD: &str = "admin123";

fn main() -> anyhow::Result<()> {
    login_probe::system::tracing::initialize()?;

    let check = HashCheck::new(PASSWORD, REFERENCE_DIGEST);
    tracing::debug!(matches = check.matches(), "Hash computed");

    let mut out = std::io::stdout();
    println!("{}", check.computed);
    println!();
    report::write_hash_check(&mut out, &check)?;

    Ok(())
}
