use thiserror::Error;

use crate::domain::DomainError;
use crate::store::StoreError;

/// Ошибки, которые видит чат-слой.
///
/// Единственная точка трансляции в пользовательский текст — сам
/// чат-слой; здесь только классификация. Ретраев нет, кроме явного
/// «создали игрока, повторите команду» (это исход, а не ошибка).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Неправильные входные данные (не-числовой счётчик draw и т.п.).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// Карты с таким именем нет в каталоге.
    #[error("Карта \"{0}\" не существует")]
    UnknownCard(String),

    /// Нарушение доменного правила (нет активной колоды, мало карт...).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Ошибка хранилища (не найден игрок, файловая система).
    #[error(transparent)]
    Store(#[from] StoreError),
}
