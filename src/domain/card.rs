use serde::{Deserialize, Serialize};

/// Определение карты из общего каталога.
///
/// Идентичность карты — её `name` (уникально в пределах каталога).
/// Колоды и рука игрока хранят только имена; сами определения
/// живут в каталоге и не меняются во время сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Card {
    /// Ссылка на изображение карты (чат-слой показывает её в embed'е).
    pub link: String,
    pub name: String,
    /// Произвольные свойства карты (стоимость, тип и т.д.).
    pub props: serde_json::Map<String, serde_json::Value>,
}

impl Card {
    pub fn new(
        link: impl Into<String>,
        name: impl Into<String>,
        props: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            link: link.into(),
            name: name.into(),
            props,
        }
    }
}
