use tracing::{debug, info};

use crate::api::commands::{ChatUser, Command};
use crate::api::dto::{build_player_view, CardView, CommandOutcome, DeckSummary};
use crate::api::errors::ApiError;
use crate::domain::{Deck, DomainError, Player};
use crate::store::{Database, PlayerLookup};

/// Диспетчер команд поверх `Database`.
///
/// Чат-слой для каждого входящего сообщения вызывает `handle` и
/// рендерит исход/ошибку. Команды обрабатываются по одной, вызовы
/// синхронные — очередей и блокировок внутри нет.
#[derive(Debug)]
pub struct CommandService {
    db: Database,
}

impl CommandService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn database_mut(&mut self) -> &mut Database {
        &mut self.db
    }

    /// Выполнить команду от имени пользователя.
    ///
    /// Для команд, привязанных к игроку, работает протокол
    /// lookup-or-create: незнакомый id получает свежую запись и исход
    /// `NewPlayerCreated` — сама команда на этом вызове не выполняется,
    /// пользователя просят повторить её один раз.
    pub fn handle(
        &mut self,
        user: &ChatUser,
        command: Command,
    ) -> Result<CommandOutcome, ApiError> {
        debug!(user_id = user.id, command = ?command, "handling command");
        match command {
            Command::ShowAllCards => {
                let cards = self.db.cards().iter().map(CardView::from_card).collect();
                Ok(CommandOutcome::CardList(cards))
            }
            Command::SaveCards => {
                self.db.resave_catalog()?;
                Ok(CommandOutcome::Saved)
            }
            Command::WipeAll => {
                self.db.wipe_all()?;
                info!("all player data wiped");
                Ok(CommandOutcome::Wiped)
            }
            Command::Restart => {
                self.db.reset()?;
                Ok(CommandOutcome::Restarted)
            }
            player_command => {
                let player =
                    match self.db.get_or_create_player(&user.username, user.id)? {
                        PlayerLookup::Found(p) => p,
                        PlayerLookup::Created(p) => {
                            return Ok(CommandOutcome::NewPlayerCreated {
                                username: p.username,
                                id: p.id,
                            })
                        }
                    };
                self.handle_player_command(player, player_command)
            }
        }
    }

    fn handle_player_command(
        &mut self,
        mut player: Player,
        command: Command,
    ) -> Result<CommandOutcome, ApiError> {
        match command {
            Command::WhoAmI => Ok(CommandOutcome::Player(build_player_view(
                self.db.catalog(),
                &player,
            ))),

            Command::Decks => Ok(CommandOutcome::DeckList(deck_summaries(&player))),

            Command::NewDeck { name } => {
                player.add_deck(Deck::new(name))?;
                self.db.save_player(&player)?;
                Ok(CommandOutcome::DecksChanged(deck_summaries(&player)))
            }

            Command::RemoveDeck { name } => {
                player.remove_deck(&name)?;
                self.db.save_player(&player)?;
                Ok(CommandOutcome::DecksChanged(deck_summaries(&player)))
            }

            Command::SetCurrentDeck { name } => {
                player.set_active_deck(&name)?;
                self.db.save_player(&player)?;
                Ok(CommandOutcome::ActiveDeckSet { name })
            }

            Command::AddCardToDeck {
                card_name,
                deck_name,
            } => {
                self.add_card(&mut player, &card_name, &deck_name)?;
                self.db.save_player(&player)?;
                Ok(CommandOutcome::CardAdded {
                    card_name,
                    deck_name,
                })
            }

            Command::AddCardToOtherDeck {
                card_name,
                other_name,
                deck_name,
            } => {
                // Целевой игрок ищется по отображаемому имени; для него
                // автосоздания нет — «не найден» уходит ошибкой.
                let mut other = self.db.find_player_by_name(&other_name)?;
                self.add_card(&mut other, &card_name, &deck_name)?;
                self.db.save_player(&other)?;
                Ok(CommandOutcome::CardAdded {
                    card_name,
                    deck_name,
                })
            }

            Command::Draw { count } => {
                let n: usize = count.trim().parse().map_err(|_| {
                    ApiError::BadRequest(format!("счётчик draw должен быть числом, а не \"{count}\""))
                })?;
                let drawn = player.draw(n)?;
                self.db.save_player(&player)?;
                Ok(CommandOutcome::Drawn(
                    drawn
                        .iter()
                        .map(|name| CardView::resolve(self.db.catalog(), name))
                        .collect(),
                ))
            }

            Command::Play { card_name } => {
                if !self.db.is_valid_card_name(&card_name) {
                    return Err(ApiError::UnknownCard(card_name));
                }
                player.play(&card_name)?;
                self.db.save_player(&player)?;
                Ok(CommandOutcome::Played(CardView::resolve(
                    self.db.catalog(),
                    &card_name,
                )))
            }

            Command::SaveMe => {
                self.db.save_player(&player)?;
                Ok(CommandOutcome::Saved)
            }

            // Не-игровые команды обработаны в `handle`.
            other => unreachable!("non-player command routed here: {other:?}"),
        }
    }

    /// Общий шаг для addCardToDeck / addCardToOtherDeck: карта должна
    /// существовать в каталоге, колода — у игрока.
    fn add_card(
        &self,
        player: &mut Player,
        card_name: &str,
        deck_name: &str,
    ) -> Result<(), ApiError> {
        if !self.db.is_valid_card_name(card_name) {
            return Err(ApiError::UnknownCard(card_name.to_string()));
        }
        let deck = player
            .deck_mut(deck_name)
            .ok_or_else(|| DomainError::DeckNotFound(deck_name.to_string()))?;
        deck.add_card(card_name);
        Ok(())
    }
}

fn deck_summaries(player: &Player) -> Vec<DeckSummary> {
    player
        .decks
        .iter()
        .map(|d| DeckSummary {
            name: d.name.clone(),
            card_count: d.len(),
        })
        .collect()
}
