//! Диагностические утилиты для функции авторизации портала:
//! хеширование пароля и пробный запрос входа.

pub mod probe;
pub mod shared;
pub mod system;
