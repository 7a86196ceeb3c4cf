use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::errors::DomainError;
use crate::domain::PlayerId;

/// Персистентное состояние игрока.
///
/// `id` приходит извне (id пользователя чат-платформы) и является
/// первичным ключом в хранилище. In-memory экземпляр — отсоединённая
/// копия строки из `players.json`: изменения видны только после
/// `save_player`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub username: String,
    pub id: PlayerId,
    /// Рука: имена карт, вытянутых из активной колоды.
    pub hand: Vec<String>,
    /// Колоды игрока; имена уникальны в пределах игрока.
    pub decks: Vec<Deck>,
    /// Имя активной колоды (если выбрана). В JSON — "activeDeck".
    #[serde(rename = "activeDeck", default)]
    pub active_deck: Option<String>,
}

impl Player {
    /// Новый игрок: пустая рука, без колод, активная колода не выбрана.
    pub fn new(username: impl Into<String>, id: PlayerId) -> Self {
        Self {
            username: username.into(),
            id,
            hand: Vec::new(),
            decks: Vec::new(),
            active_deck: None,
        }
    }

    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.name == name)
    }

    pub fn deck_mut(&mut self, name: &str) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.name == name)
    }

    /// Завести новую колоду. Имена колод уникальны в пределах игрока.
    pub fn add_deck(&mut self, deck: Deck) -> Result<(), DomainError> {
        if self.deck(&deck.name).is_some() {
            return Err(DomainError::DuplicateDeck(deck.name));
        }
        self.decks.push(deck);
        Ok(())
    }

    /// Удалить колоду по имени. Если она была активной — сбросить выбор.
    pub fn remove_deck(&mut self, name: &str) -> Result<(), DomainError> {
        match self.decks.iter().position(|d| d.name == name) {
            Some(idx) => {
                self.decks.remove(idx);
                if self.active_deck.as_deref() == Some(name) {
                    self.active_deck = None;
                }
                Ok(())
            }
            None => Err(DomainError::DeckNotFound(name.to_string())),
        }
    }

    /// Выбрать активную колоду.
    ///
    /// Валидация на set-time (fail fast); при draw имя перепроверяется
    /// ещё раз, на случай если колоду удалили после выбора.
    pub fn set_active_deck(&mut self, name: &str) -> Result<(), DomainError> {
        if self.deck(name).is_none() {
            return Err(DomainError::DeckNotFound(name.to_string()));
        }
        self.active_deck = Some(name.to_string());
        Ok(())
    }

    /// Вытянуть `n` карт из активной колоды в руку (pop-семантика,
    /// в отличие от `Deck::draw`, который только подсматривает).
    ///
    /// Карты переносятся в исходном порядке колоды; суммарное число карт
    /// `hand + все колоды` при этом не меняется. Сохранение — на вызывающем.
    pub fn draw(&mut self, n: usize) -> Result<Vec<String>, DomainError> {
        let active = self
            .active_deck
            .clone()
            .ok_or(DomainError::NoActiveDeck)?;
        let deck = self
            .deck_mut(&active)
            .ok_or(DomainError::DeckNotFound(active))?;
        if deck.cards.len() < n {
            return Err(DomainError::InsufficientCards {
                requested: n,
                available: deck.cards.len(),
            });
        }
        let drawn: Vec<String> = deck.cards.drain(..n).collect();
        self.hand.extend(drawn.iter().cloned());
        Ok(drawn)
    }

    /// Разыграть карту из руки (убирает первое совпадение по имени).
    pub fn play(&mut self, card_name: &str) -> Result<(), DomainError> {
        match self.hand.iter().position(|c| c == card_name) {
            Some(idx) => {
                self.hand.remove(idx);
                Ok(())
            }
            None => Err(DomainError::CardNotInHand(card_name.to_string())),
        }
    }

    /// Все карты игрока: рука + все колоды. Инвариант для draw.
    pub fn total_card_count(&self) -> usize {
        self.hand.len() + self.decks.iter().map(Deck::len).sum::<usize>()
    }
}
