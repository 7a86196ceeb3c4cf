use thiserror::Error;

use crate::domain::PlayerId;

/// Ошибки хранилища.
///
/// Битый JSON на диске сюда НЕ попадает: путь чтения восстанавливается
/// сам, переписывая пустой скелет документа (данные малоценные, бэкапа
/// всё равно нет). `Json` остаётся только для пути сериализации.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Игрок с id={0} не найден")]
    PlayerNotFound(PlayerId),

    #[error("Игрок с именем \"{0}\" не найден")]
    PlayerNameNotFound(String),

    #[error("Игрок с id={0} уже существует")]
    PlayerExists(PlayerId),

    #[error("Ошибка файловой системы: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка сериализации: {0}")]
    Json(#[from] serde_json::Error),
}
