//! Ядро карточного чат-бота: доменная модель (игроки, колоды, карты)
//! и персистентность поверх плоских JSON-файлов.
//!
//! Слои:
//! - `domain` — Player / Deck / Card и правила операций над ними;
//! - `store` — каталог карт + хранилище игроков (whole-document rewrite);
//! - `api` — команды, DTO и сервис-диспетчер для чат-слоя;
//! - `infra` — RNG-реализации для перемешивания колод.
//!
//! Сам чат-клиент (Discord и т.п.) сюда не входит: он передаёт нам
//! пару `(ChatUser, Command)` и рендерит `CommandOutcome` / `ApiError`.

pub mod api;
pub mod domain;
pub mod infra;
pub mod store;
