// src/bin/cardbot_dev_cli.rs

use cardbot_engine::api::{ChatUser, Command, CommandOutcome, CommandService};
use cardbot_engine::domain::Card;
use cardbot_engine::store::Database;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== CARDBOT DEV CLI ===\n");

    // Рабочая директория хранилища: аргумент или временная папка.
    let base = match std::env::args().nth(1) {
        Some(dir) => std::path::PathBuf::from(dir),
        None => std::env::temp_dir().join("cardbot_dev"),
    };
    println!("Хранилище: {}\n", base.display());

    let mut db = Database::open(&base)?;

    // Чистый старт: прошлые прогоны не должны влиять на сценарий.
    db.wipe_all()?;
    db.reset()?;

    // Заполняем каталог парой тестовых карт.
    let mut props = serde_json::Map::new();
    props.insert("cost".into(), serde_json::json!(3));
    db.save_catalog(vec![
        Card::new("https://cards.example/fireball.png", "Fireball", props),
        Card::new(
            "https://cards.example/shield.png",
            "Shield",
            serde_json::Map::new(),
        ),
    ])?;

    let mut service = CommandService::new(db);
    let user = ChatUser::new(42, "dev-user");

    // Первый вызов любому незнакомому id создаёт запись и просит повтор.
    run(&mut service, &user, Command::WhoAmI);
    run(&mut service, &user, Command::WhoAmI);

    run(&mut service, &user, Command::NewDeck { name: "Main".into() });
    run(
        &mut service,
        &user,
        Command::AddCardToDeck {
            card_name: "Fireball".into(),
            deck_name: "Main".into(),
        },
    );
    run(
        &mut service,
        &user,
        Command::AddCardToDeck {
            card_name: "Shield".into(),
            deck_name: "Main".into(),
        },
    );
    run(&mut service, &user, Command::SetCurrentDeck { name: "Main".into() });

    // Не-числовой счётчик — BadRequest.
    run(&mut service, &user, Command::Draw { count: "abc".into() });
    run(&mut service, &user, Command::Draw { count: "2".into() });

    run(&mut service, &user, Command::Play { card_name: "Fireball".into() });
    run(&mut service, &user, Command::Decks);
    run(&mut service, &user, Command::ShowAllCards);
    run(&mut service, &user, Command::WhoAmI);

    Ok(())
}

fn run(service: &mut CommandService, user: &ChatUser, command: Command) {
    println!("> {command:?}");
    match service.handle(user, command) {
        Ok(CommandOutcome::NewPlayerCreated { username, id }) => {
            println!("  создан новый игрок {username} (id={id}), повторите команду\n");
        }
        Ok(outcome) => println!("  {outcome:?}\n"),
        Err(err) => println!("  ошибка: {err}\n"),
    }
}
