use thiserror::Error;

/// Ошибки доменных операций над игроком и колодами.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("В колоде недостаточно карт: запрошено {requested}, доступно {available}")]
    InsufficientCards { requested: usize, available: usize },

    #[error("Активная колода не выбрана")]
    NoActiveDeck,

    #[error("Колода \"{0}\" не найдена")]
    DeckNotFound(String),

    #[error("Колода \"{0}\" уже существует")]
    DuplicateDeck(String),

    #[error("Карты \"{0}\" нет в колоде")]
    CardNotInDeck(String),

    #[error("Карты \"{0}\" нет в руке")]
    CardNotInHand(String),
}
