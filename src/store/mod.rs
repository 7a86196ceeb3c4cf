//! Персистентность поверх плоских JSON-файлов.
//!
//! Оба документа переписываются целиком при каждой мутации
//! (whole-document rewrite): ни журнала, ни индексов, ни частичных
//! апдейтов. Для объёмов бота (десятки-сотни игроков) это осознанный
//! выбор в пользу простоты.
//!
//! - `data/players.json` — коллекция игроков;
//! - `assets/cards/cards.json` — общий каталог карт.

pub mod catalog;
pub mod errors;
pub mod players;

pub use catalog::*;
pub use errors::*;
pub use players::*;

use std::path::Path;

use crate::domain::{Card, Player, PlayerId};

/// Результат get-or-create: явные два исхода вместо скрытого
/// автосоздания внутри ветки «не найден».
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerLookup {
    /// Игрок уже был в хранилище.
    Found(Player),
    /// Игрока не было; создана свежая запись. Вызывающий должен
    /// попросить пользователя повторить команду (см. протокол api).
    Created(Player),
}

/// Фасад над обоими файлами — контекст-объект, который создаётся один
/// раз на старте процесса и передаётся в каждый обработчик команды
/// (вместо модульных синглтонов).
///
/// Методы мутации берут `&mut self`: в пределах процесса доступ к
/// файлам сериализуется заимствованием. Межпроцессных блокировок нет —
/// lost-update между двумя копиями одного игрока принят как данность.
#[derive(Debug)]
pub struct Database {
    players: PlayerStore,
    catalog: CardCatalog,
}

impl Database {
    /// Открыть (и при необходимости инициализировать) оба документа
    /// под `base`. Повторный вызов на уже инициализированной директории —
    /// просто перечитывание.
    pub fn open(base: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            players: PlayerStore::open(base)?,
            catalog: CardCatalog::open(base)?,
        })
    }

    pub fn find_player_by_id(&self, id: PlayerId) -> Result<Player, StoreError> {
        self.players.find_by_id(id)
    }

    pub fn find_player_by_name(&self, name: &str) -> Result<Player, StoreError> {
        self.players.find_by_name(name)
    }

    pub fn create_player(
        &mut self,
        username: &str,
        id: PlayerId,
    ) -> Result<Player, StoreError> {
        self.players.create(username, id)
    }

    /// Явный get-or-create (протокол «lookup-or-create»).
    pub fn get_or_create_player(
        &mut self,
        username: &str,
        id: PlayerId,
    ) -> Result<PlayerLookup, StoreError> {
        match self.players.find_by_id(id) {
            Ok(player) => Ok(PlayerLookup::Found(player)),
            Err(StoreError::PlayerNotFound(_)) => {
                let player = self.players.create(username, id)?;
                Ok(PlayerLookup::Created(player))
            }
            Err(err) => Err(err),
        }
    }

    pub fn save_player(&mut self, player: &Player) -> Result<(), StoreError> {
        self.players.save(player)
    }

    pub fn cards(&self) -> &[Card] {
        self.catalog.cards()
    }

    /// Прямой доступ к каталогу (нужен DTO-резолверам).
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn lookup_card(&self, name: &str) -> Option<&Card> {
        self.catalog.lookup(name)
    }

    pub fn is_valid_card_name(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Полностью переписать каталог карт.
    pub fn save_catalog(&mut self, cards: Vec<Card>) -> Result<(), StoreError> {
        self.catalog.save(cards)
    }

    /// Пересохранить каталог как есть (команда saveCards).
    pub fn resave_catalog(&mut self) -> Result<(), StoreError> {
        self.catalog.resave()
    }

    /// Снести всю директорию `data/` (без подтверждения — оно, если
    /// нужно, живёт в чат-слое). Каталог карт не трогаем.
    pub fn wipe_all(&mut self) -> Result<(), StoreError> {
        self.players.wipe_all()
    }

    /// Повторная инициализация: перечитать каталог и пересоздать пустое
    /// хранилище игроков, если файлы были удалены. Иначе — no-op.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.players.reset()?;
        self.catalog.reset()
    }
}
