use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::infra::RandomSource;

/// Именованная колода игрока.
///
/// Хранит только имена карт; определения (ссылка, свойства) живут
/// в каталоге и резолвятся при отображении/розыгрыше. Значит,
/// «битая» ссылка на удалённую из каталога карту всплывает только
/// при резолве, а не здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<String>,
}

impl Deck {
    /// Новая пустая колода.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Добавить карту в конец колоды.
    pub fn add_card(&mut self, card_name: impl Into<String>) {
        self.cards.push(card_name.into());
    }

    /// Перемешать колоду (равномерно, через переданный RNG).
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        rng.shuffle(&mut self.cards);
    }

    /// Посмотреть первые `n` карт, НЕ убирая их из колоды (peek).
    ///
    /// Граница строгая, как в исходном поведении: `n >= len` — ошибка,
    /// то есть «посмотреть все оставшиеся» тоже нельзя.
    pub fn draw(&self, n: usize) -> Result<&[String], DomainError> {
        if self.cards.len() > n {
            Ok(&self.cards[..n])
        } else {
            Err(DomainError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            })
        }
    }

    /// Убрать первую карту с данным именем.
    pub fn remove_card(&mut self, card_name: &str) -> Result<(), DomainError> {
        match self.cards.iter().position(|c| c == card_name) {
            Some(idx) => {
                self.cards.remove(idx);
                Ok(())
            }
            None => Err(DomainError::CardNotInDeck(card_name.to_string())),
        }
    }
}
