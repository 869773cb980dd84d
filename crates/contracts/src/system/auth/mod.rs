use serde::{Deserialize, Deserializer, Serialize};

/// Тело запроса к функции авторизации портала
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginProbeRequest {
    pub action: String,
    pub email: String,
    /// Пароль передаётся открытым текстом, хеширует сервер
    pub password: String,
}

impl LoginProbeRequest {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            action: "login".to_string(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Идентификатор пользователя: сервер отдаёт его числом, но строку тоже принимаем
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// Ответ функции авторизации. Форма определяется внешним сервисом,
/// неизвестные поля игнорируются.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginProbeResponse {
    /// Любое значение приводится к bool: null, false, 0 и "" — неуспех
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_shape() {
        let request = LoginProbeRequest::login("admin@test.com", "admin123");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "login",
                "email": "admin@test.com",
                "password": "admin123"
            })
        );
    }

    #[test]
    fn test_success_response() {
        let response: LoginProbeResponse = serde_json::from_str(
            r#"{"success": true, "userId": 7, "fio": "Иванов И.И.", "role": "admin", "token": "x"}"#,
        )
        .unwrap();
        assert!(response.success);
        assert_eq!(response.fio.as_deref(), Some("Иванов И.И."));
        assert_eq!(response.role.as_deref(), Some("admin"));
        assert_eq!(response.user_id, Some(UserId::Number(7)));
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_failure_response() {
        let response: LoginProbeResponse =
            serde_json::from_str(r#"{"success": false, "error": "Неверный пароль"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Неверный пароль"));
    }

    #[test]
    fn test_missing_success_is_false() {
        let response: LoginProbeResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn test_user_id_text() {
        let response: LoginProbeResponse =
            serde_json::from_str(r#"{"success": true, "userId": "u-1"}"#).unwrap();
        assert_eq!(response.user_id.unwrap().to_string(), "u-1");
    }

    #[test]
    fn test_success_follows_truthiness() {
        let cases = [
            (r#"{"success": null, "error": "Z"}"#, false),
            (r#"{"success": 0}"#, false),
            (r#"{"success": ""}"#, false),
            (r#"{"success": 1, "fio": "X"}"#, true),
            (r#"{"success": "yes"}"#, true),
        ];
        for (body, expected) in cases {
            let response: LoginProbeResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.success, expected, "{}", body);
        }
    }
}
