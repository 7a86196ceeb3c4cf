//! Тесты сервиса команд: протокол lookup-or-create, валидация
//! аргументов, резолв карт в DTO.

use cardbot_engine::api::{
    ApiError, CardView, ChatUser, Command, CommandOutcome, CommandService,
};
use cardbot_engine::domain::{Card, DomainError};
use cardbot_engine::store::{Database, StoreError};
use tempfile::{tempdir, TempDir};

//
// ---------- helpers ----------
//

fn card(name: &str) -> Card {
    Card::new(
        format!("https://cards.example/{name}.png"),
        name,
        serde_json::Map::new(),
    )
}

/// Сервис поверх временной директории с каталогом из двух карт.
fn make_service() -> (TempDir, CommandService) {
    let dir = tempdir().unwrap();
    let mut db = Database::open(dir.path()).unwrap();
    db.save_catalog(vec![card("Fireball"), card("Shield")])
        .unwrap();
    (dir, CommandService::new(db))
}

fn user() -> ChatUser {
    ChatUser::new(42, "abc")
}

/// Зарегистрировать игрока (первый вызов создаёт, второй выполняет).
fn register(service: &mut CommandService, u: &ChatUser) {
    let first = service.handle(u, Command::WhoAmI).unwrap();
    assert!(matches!(first, CommandOutcome::NewPlayerCreated { .. }));
}

fn handle_ok(service: &mut CommandService, u: &ChatUser, cmd: Command) -> CommandOutcome {
    service.handle(u, cmd).unwrap()
}

//
// ---------- lookup-or-create ----------
//

/// Первый вызов незнакомого id создаёт запись и просит повтор;
/// повтор выполняет команду.
#[test]
fn first_command_creates_player_and_asks_retry() {
    let (_dir, mut service) = make_service();
    let u = user();

    let first = service.handle(&u, Command::WhoAmI).unwrap();
    assert_eq!(
        first,
        CommandOutcome::NewPlayerCreated {
            username: "abc".to_string(),
            id: 42
        }
    );

    let second = service.handle(&u, Command::WhoAmI).unwrap();
    match second {
        CommandOutcome::Player(view) => {
            assert_eq!(view.username, "abc");
            assert_eq!(view.id, 42);
            assert!(view.hand.is_empty());
            assert!(view.decks.is_empty());
            assert_eq!(view.active_deck, None);
        }
        other => panic!("ожидали Player, получили {other:?}"),
    }
}

//
// ---------- колоды ----------
//

#[test]
fn new_deck_then_duplicate_rejected() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    let outcome = handle_ok(&mut service, &u, Command::NewDeck { name: "Main".into() });
    match outcome {
        CommandOutcome::DecksChanged(decks) => {
            assert_eq!(decks.len(), 1);
            assert_eq!(decks[0].name, "Main");
            assert_eq!(decks[0].card_count, 0);
        }
        other => panic!("ожидали DecksChanged, получили {other:?}"),
    }

    let err = service
        .handle(&u, Command::NewDeck { name: "Main".into() })
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Domain(DomainError::DuplicateDeck(name)) if name == "Main"
    ));
}

#[test]
fn set_current_deck_validates_at_set_time() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    let err = service
        .handle(&u, Command::SetCurrentDeck { name: "ghost".into() })
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Domain(DomainError::DeckNotFound(name)) if name == "ghost"
    ));
}

#[test]
fn add_card_validates_catalog_and_deck() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);
    handle_ok(&mut service, &u, Command::NewDeck { name: "Main".into() });

    // Неизвестная карта.
    let err = service
        .handle(
            &u,
            Command::AddCardToDeck {
                card_name: "Missing".into(),
                deck_name: "Main".into(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ApiError::UnknownCard(name) if name == "Missing"));

    // Неизвестная колода.
    let err = service
        .handle(
            &u,
            Command::AddCardToDeck {
                card_name: "Fireball".into(),
                deck_name: "ghost".into(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Domain(DomainError::DeckNotFound(name)) if name == "ghost"
    ));
}

//
// ---------- draw / play ----------
//

#[test]
fn draw_rejects_non_numeric_count() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    let err = service
        .handle(&u, Command::Draw { count: "abc".into() })
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn draw_without_active_deck_fails() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    let err = service
        .handle(&u, Command::Draw { count: "1".into() })
        .unwrap_err();
    assert!(matches!(err, ApiError::Domain(DomainError::NoActiveDeck)));
}

/// Полный сценарий: колода из двух карт, draw 2 → рука из двух карт,
/// колода пустая; повторный draw — InsufficientCards.
#[test]
fn full_draw_flow_persists_state() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    handle_ok(&mut service, &u, Command::NewDeck { name: "Main".into() });
    for card_name in ["Fireball", "Shield"] {
        handle_ok(
            &mut service,
            &u,
            Command::AddCardToDeck {
                card_name: card_name.into(),
                deck_name: "Main".into(),
            },
        );
    }
    handle_ok(&mut service, &u, Command::SetCurrentDeck { name: "Main".into() });

    let outcome = handle_ok(&mut service, &u, Command::Draw { count: "2".into() });
    match outcome {
        CommandOutcome::Drawn(cards) => {
            let names: Vec<_> = cards.iter().map(CardView::name).collect();
            assert_eq!(names, ["Fireball", "Shield"]);
        }
        other => panic!("ожидали Drawn, получили {other:?}"),
    }

    // Состояние сохранилось в файл.
    let saved = service.database().find_player_by_id(42).unwrap();
    assert_eq!(saved.hand, vec!["Fireball", "Shield"]);
    assert!(saved.deck("Main").unwrap().is_empty());

    let err = service
        .handle(&u, Command::Draw { count: "1".into() })
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Domain(DomainError::InsufficientCards { .. })
    ));
}

#[test]
fn play_removes_card_from_hand_and_returns_view() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    handle_ok(&mut service, &u, Command::NewDeck { name: "Main".into() });
    handle_ok(
        &mut service,
        &u,
        Command::AddCardToDeck {
            card_name: "Fireball".into(),
            deck_name: "Main".into(),
        },
    );
    handle_ok(&mut service, &u, Command::SetCurrentDeck { name: "Main".into() });
    handle_ok(&mut service, &u, Command::Draw { count: "1".into() });

    let outcome = handle_ok(&mut service, &u, Command::Play { card_name: "Fireball".into() });
    match outcome {
        CommandOutcome::Played(view) => assert_eq!(view.name(), "Fireball"),
        other => panic!("ожидали Played, получили {other:?}"),
    }

    assert!(service
        .database()
        .find_player_by_id(42)
        .unwrap()
        .hand
        .is_empty());

    // Карты, которой нет в каталоге, разыграть нельзя.
    let err = service
        .handle(&u, Command::Play { card_name: "Missing".into() })
        .unwrap_err();
    assert!(matches!(err, ApiError::UnknownCard(_)));
}

//
// ---------- резолв карт в DTO ----------
//

/// Имя без записи в каталоге даёт явный Unknown-слот; длина колоды
/// в выводе сохраняется.
#[test]
fn dangling_card_reference_resolves_to_unknown_placeholder() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    handle_ok(&mut service, &u, Command::NewDeck { name: "Main".into() });
    handle_ok(
        &mut service,
        &u,
        Command::AddCardToDeck {
            card_name: "Fireball".into(),
            deck_name: "Main".into(),
        },
    );

    // Карту убрали из каталога — ссылка в колоде повисла.
    service.database_mut().save_catalog(vec![card("Shield")]).unwrap();

    let outcome = handle_ok(&mut service, &u, Command::WhoAmI);
    match outcome {
        CommandOutcome::Player(view) => {
            assert_eq!(view.decks[0].cards.len(), 1);
            assert_eq!(
                view.decks[0].cards[0],
                CardView::Unknown {
                    name: "Fireball".to_string()
                }
            );
        }
        other => panic!("ожидали Player, получили {other:?}"),
    }
}

//
// ---------- чужие колоды ----------
//

#[test]
fn add_card_to_other_players_deck() {
    let (_dir, mut service) = make_service();
    let admin = user();
    let other = ChatUser::new(7, "friend");
    register(&mut service, &admin);
    register(&mut service, &other);
    handle_ok(&mut service, &other, Command::NewDeck { name: "Main".into() });

    handle_ok(
        &mut service,
        &admin,
        Command::AddCardToOtherDeck {
            card_name: "Shield".into(),
            other_name: "friend".into(),
            deck_name: "Main".into(),
        },
    );

    let saved = service.database().find_player_by_id(7).unwrap();
    assert_eq!(saved.deck("Main").unwrap().cards, vec!["Shield"]);

    // Для целевого игрока автосоздания нет.
    let err = service
        .handle(
            &admin,
            Command::AddCardToOtherDeck {
                card_name: "Shield".into(),
                other_name: "nobody".into(),
                deck_name: "Main".into(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Store(StoreError::PlayerNameNotFound(_))
    ));
}

//
// ---------- каталог и обслуживание ----------
//

#[test]
fn show_all_cards_lists_catalog() {
    let (_dir, mut service) = make_service();
    let u = user();

    let outcome = handle_ok(&mut service, &u, Command::ShowAllCards);
    match outcome {
        CommandOutcome::CardList(cards) => {
            let names: Vec<_> = cards.iter().map(CardView::name).collect();
            assert_eq!(names, ["Fireball", "Shield"]);
        }
        other => panic!("ожидали CardList, получили {other:?}"),
    }
}

#[test]
fn wipe_then_restart_starts_from_scratch() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    assert_eq!(
        handle_ok(&mut service, &u, Command::WipeAll),
        CommandOutcome::Wiped
    );
    assert_eq!(
        handle_ok(&mut service, &u, Command::Restart),
        CommandOutcome::Restarted
    );

    // Все данные снесены: игрока снова нужно создавать.
    let outcome = handle_ok(&mut service, &u, Command::WhoAmI);
    assert!(matches!(outcome, CommandOutcome::NewPlayerCreated { .. }));
}

#[test]
fn save_me_and_save_cards_ack() {
    let (_dir, mut service) = make_service();
    let u = user();
    register(&mut service, &u);

    assert_eq!(
        handle_ok(&mut service, &u, Command::SaveMe),
        CommandOutcome::Saved
    );
    assert_eq!(
        handle_ok(&mut service, &u, Command::SaveCards),
        CommandOutcome::Saved
    );
}
