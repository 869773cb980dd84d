//! Пробный вход администратора через функцию авторизации портала.
//!
//! Ошибка запроса печатается в отчёт, код выхода при этом 0.

use contracts::system::auth::LoginProbeRequest;
use login_probe::probe::{report, sha256_hex, LoginProbe};
use login_probe::shared::config::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    login_probe::system::tracing::initialize()?;

    let config = load_config()?;
    let settings = &config.probe;
    let mut out = std::io::stdout();

    report::write_banner(&mut out, "ADMIN LOGIN TEST")?;

    let digest = sha256_hex(&settings.password);
    report::write_hash_info(&mut out, &settings.password, &digest)?;

    let request = LoginProbeRequest::login(&settings.email, &settings.password);
    report::write_request_info(&mut out, &settings.endpoint, &request)?;

    println!("\n--- SENDING REQUEST ---");
    let result = match LoginProbe::new(settings) {
        Ok(probe) => probe.send(&request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => report::write_response(&mut out, &outcome)?,
        Err(err) => {
            tracing::error!("Login probe failed: {}", err);
            report::write_failure(&mut out, &err)?;
        }
    }

    println!();
    report::write_rule(&mut out)?;

    Ok(())
}
