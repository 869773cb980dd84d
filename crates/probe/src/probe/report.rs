//! Текстовый отчёт утилит для консоли.
//!
//! Все функции пишут в произвольный `io::Write`, чтобы отчёт можно было
//! проверять в тестах без захвата stdout.

use std::io::{self, Write};

use contracts::system::auth::{LoginProbeRequest, LoginProbeResponse};

use super::client::{ProbeError, ProbeOutcome};
use super::hash::HashCheck;

const RULE_WIDTH: usize = 60;
const NOT_AVAILABLE: &str = "N/A";

pub fn write_rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn write_banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    write_rule(out)?;
    writeln!(out, "{}", title)?;
    writeln!(
        out,
        "Started: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    write_rule(out)
}

fn write_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", title)
}

pub fn write_hash_info(out: &mut impl Write, password: &str, digest: &str) -> io::Result<()> {
    write_section(out, "PASSWORD HASH INFO")?;
    writeln!(out, "Plain Password: {}", password)?;
    writeln!(out, "SHA256 Hash: {}", digest)?;
    writeln!(out, "Hash Length: {} characters", digest.len())
}

pub fn write_hash_check(out: &mut impl Write, check: &HashCheck) -> io::Result<()> {
    writeln!(out, "Password: {}", check.password)?;
    writeln!(out, "Computed SHA256: {}", check.computed)?;
    writeln!(out, "Expected SHA256: {}", check.expected)?;
    writeln!(out, "Match: {}", check.matches())
}

pub fn write_request_info(
    out: &mut impl Write,
    url: &str,
    request: &LoginProbeRequest,
) -> io::Result<()> {
    write_section(out, "REQUEST INFO")?;
    writeln!(out, "Endpoint: {}", url)?;
    writeln!(out, "Method: POST")?;
    writeln!(out, "Content-Type: application/json")?;
    writeln!(out, "Payload:")?;
    writeln!(out, "{}", to_pretty(request))
}

pub fn write_response(out: &mut impl Write, outcome: &ProbeOutcome) -> io::Result<()> {
    writeln!(out, "Request completed in {}ms", outcome.elapsed.as_millis())?;

    write_section(out, "RESPONSE INFO")?;
    writeln!(out, "Status Code: {}", outcome.status)?;
    writeln!(out, "Status Text: {}", outcome.status_text)?;
    writeln!(out, "OK: {}", outcome.is_success())?;

    write_section(out, "RESPONSE HEADERS")?;
    for (name, value) in &outcome.headers {
        writeln!(out, "{}: {}", name, value)?;
    }

    write_section(out, "RESPONSE BODY (RAW)")?;
    writeln!(out, "{}", outcome.body)?;

    write_section(out, "RESPONSE BODY (PARSED)")?;
    let value = match serde_json::from_str::<serde_json::Value>(&outcome.body) {
        Ok(value) => value,
        Err(e) => {
            writeln!(out, "WARNING - Response is not valid JSON")?;
            return writeln!(out, "Parse Error: {}", e);
        }
    };
    writeln!(out, "{}", to_pretty(&value))?;

    match serde_json::from_value::<LoginProbeResponse>(value) {
        Ok(response) => write_analysis(out, &response),
        Err(e) => {
            writeln!(out, "WARNING - Response does not match the login contract")?;
            writeln!(out, "Parse Error: {}", e)
        }
    }
}

pub fn write_analysis(out: &mut impl Write, response: &LoginProbeResponse) -> io::Result<()> {
    write_section(out, "RESULT ANALYSIS")?;

    if response.success {
        let user_id = response
            .user_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        writeln!(out, "✓ LOGIN SUCCESSFUL")?;
        writeln!(out, "  User ID: {}", user_id)?;
        writeln!(out, "  Name: {}", or_na(&response.fio))?;
        writeln!(out, "  Company: {}", or_na(&response.company))?;
        writeln!(out, "  Position: {}", or_na(&response.position))?;
        writeln!(out, "  Role: {}", or_na(&response.role))
    } else {
        writeln!(out, "✗ LOGIN FAILED")?;
        writeln!(
            out,
            "  Error: {}",
            response.error.as_deref().unwrap_or("Unknown error")
        )
    }
}

pub fn write_failure(out: &mut impl Write, err: &ProbeError) -> io::Result<()> {
    write_section(out, "ERROR OCCURRED")?;
    writeln!(out, "✗ REQUEST FAILED")?;
    writeln!(out, "  Error Type: {}", err.kind())?;
    writeln!(out, "  Error: {}", err)?;

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        writeln!(out, "  Caused by: {}", cause)?;
        source = cause.source();
    }
    Ok(())
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn to_pretty(value: &impl serde::Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}
