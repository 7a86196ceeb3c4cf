//! Внешний API ядра бота.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что чат-слой диспатчит в ядро;
//! - DTO (dto.rs) — представления для рендера в чат-сообщения;
//! - ошибки (errors.rs) — то, что чат-слой переводит в текст пользователю;
//! - сервис (service.rs) — диспетчер команд поверх `Database`.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod service;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use service::*;
