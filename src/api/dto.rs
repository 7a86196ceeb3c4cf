use serde::{Deserialize, Serialize};

use crate::domain::{Card, Deck, Player, PlayerId};
use crate::store::CardCatalog;

/// Карта в представлении для чата.
///
/// Колоды хранят голые имена; здесь имя резолвится в определение из
/// каталога. Имя без записи в каталоге даёт явный `Unknown`-слот,
/// а не выпадает из списка — длина колоды в выводе сохраняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CardView {
    Known {
        name: String,
        link: String,
        props: serde_json::Map<String, serde_json::Value>,
    },
    Unknown {
        name: String,
    },
}

impl CardView {
    /// Из определения каталога (всегда `Known`).
    pub fn from_card(card: &Card) -> Self {
        CardView::Known {
            name: card.name.clone(),
            link: card.link.clone(),
            props: card.props.clone(),
        }
    }

    /// Резолв имени через каталог.
    pub fn resolve(catalog: &CardCatalog, name: &str) -> Self {
        match catalog.lookup(name) {
            Some(card) => CardView::from_card(card),
            None => CardView::Unknown {
                name: name.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CardView::Known { name, .. } => name,
            CardView::Unknown { name } => name,
        }
    }
}

/// DTO колоды: имя + карты в текущем порядке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DeckView {
    pub name: String,
    pub cards: Vec<CardView>,
}

/// Краткая строка списка колод («имя — N карт»).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckSummary {
    pub name: String,
    pub card_count: usize,
}

/// DTO игрока для whoAmI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerView {
    pub username: String,
    pub id: PlayerId,
    pub hand: Vec<CardView>,
    pub decks: Vec<DeckView>,
    pub active_deck: Option<String>,
}

/// Собрать DTO колоды.
pub fn build_deck_view(catalog: &CardCatalog, deck: &Deck) -> DeckView {
    DeckView {
        name: deck.name.clone(),
        cards: deck
            .cards
            .iter()
            .map(|name| CardView::resolve(catalog, name))
            .collect(),
    }
}

/// Собрать DTO игрока.
pub fn build_player_view(catalog: &CardCatalog, player: &Player) -> PlayerView {
    PlayerView {
        username: player.username.clone(),
        id: player.id,
        hand: player
            .hand
            .iter()
            .map(|name| CardView::resolve(catalog, name))
            .collect(),
        decks: player
            .decks
            .iter()
            .map(|d| build_deck_view(catalog, d))
            .collect(),
        active_deck: player.active_deck.clone(),
    }
}

/// Ответ сервиса на команду; чат-слой рендерит его в сообщение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandOutcome {
    /// Игрока не было; запись создана. Пользователя просят повторить
    /// исходную команду — сама она на этом вызове НЕ выполнена.
    NewPlayerCreated { username: String, id: PlayerId },

    /// Состояние игрока (whoAmI).
    Player(PlayerView),

    /// Список колод.
    DeckList(Vec<DeckSummary>),

    /// Все карты каталога.
    CardList(Vec<CardView>),

    /// Карты, вытянутые в руку (в порядке колоды).
    Drawn(Vec<CardView>),

    /// Разыгранная карта (для картинки в embed'е).
    Played(CardView),

    /// Активная колода переключена.
    ActiveDeckSet { name: String },

    /// Карта добавлена в колоду.
    CardAdded { card_name: String, deck_name: String },

    /// Колода создана/удалена — возвращаем обновлённый список.
    DecksChanged(Vec<DeckSummary>),

    /// Данные сохранены (saveMe / saveCards).
    Saved,

    /// Данные игроков снесены.
    Wiped,

    /// Хранилище переинициализировано.
    Restarted,
}
