use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Пользователь чат-платформы, от имени которого пришла команда.
/// Ядро знает о нём ровно столько: внешний id и отображаемое имя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatUser {
    pub id: PlayerId,
    pub username: String,
}

impl ChatUser {
    pub fn new(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Команда верхнего уровня.
///
/// Аргументы приходят из текста чата как есть; валидацию
/// (например, что счётчик draw — число) делает сервис.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Показать состояние своего игрока (имя, id, рука, колоды).
    WhoAmI,

    /// Список своих колод.
    Decks,

    /// Завести новую колоду.
    NewDeck { name: String },

    /// Удалить колоду.
    RemoveDeck { name: String },

    /// Выбрать активную колоду.
    SetCurrentDeck { name: String },

    /// Показать все карты общего каталога.
    ShowAllCards,

    /// Добавить карту из каталога в свою колоду.
    AddCardToDeck { card_name: String, deck_name: String },

    /// Добавить карту в колоду другого игрока (по отображаемому имени).
    ///
    /// Проверка прав («sudo-user» и т.п.) — забота чат-слоя, ядро
    /// просто выполняет операцию.
    AddCardToOtherDeck {
        card_name: String,
        other_name: String,
        deck_name: String,
    },

    /// Вытянуть `count` карт из активной колоды в руку.
    /// `count` — сырой текст из чата, может оказаться не числом.
    Draw { count: String },

    /// Разыграть карту из руки.
    Play { card_name: String },

    /// Пересохранить свою запись как есть.
    SaveMe,

    /// Пересохранить каталог карт на диск.
    SaveCards,

    /// Снести все данные игроков. Необратимо.
    WipeAll,

    /// Повторная инициализация хранилища.
    Restart,
}
