use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::Card;
use crate::store::errors::StoreError;

const EMPTY_CATALOG_DOC: &str = "{\"cards\":[]}";

/// Формат файла `assets/cards/cards.json`.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    cards: Vec<Card>,
}

/// Общий каталог карт.
///
/// Загружается один раз на старте и в обычной работе только читается;
/// новые карты появляются правкой файла вне бота. `save` по требованию
/// переписывает файл целиком.
#[derive(Debug)]
pub struct CardCatalog {
    file: PathBuf,
    cards: Vec<Card>,
}

impl CardCatalog {
    /// Загрузить каталог из `base/assets/cards/cards.json`.
    ///
    /// Нет файла или директории — создаётся пустой скелет. Битый JSON
    /// восстанавливается так же, как у хранилища игроков: переписываем
    /// скелет и продолжаем с пустым каталогом.
    pub fn open(base: &Path) -> Result<Self, StoreError> {
        let dir = base.join("assets").join("cards");
        let file = dir.join("cards.json");
        let cards = load_cards(&file)?;
        Ok(Self { file, cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Точное совпадение по имени, с учётом регистра; первый матч.
    pub fn lookup(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Заменить каталог целиком и переписать файл (без merge).
    pub fn save(&mut self, cards: Vec<Card>) -> Result<(), StoreError> {
        self.cards = cards;
        self.resave()
    }

    /// Переписать файл текущим in-memory списком.
    pub fn resave(&self) -> Result<(), StoreError> {
        let doc = CatalogFile {
            cards: self.cards.clone(),
        };
        fs::write(&self.file, serde_json::to_string_pretty(&doc)?)?;
        info!(file = %self.file.display(), count = self.cards.len(), "card catalog saved");
        Ok(())
    }

    /// Перечитать каталог с диска; если файл удалили — пересоздать скелет.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.cards = load_cards(&self.file)?;
        Ok(())
    }
}

/// Прочитать документ каталога, создав или восстановив его при нужде.
fn load_cards(file: &Path) -> Result<Vec<Card>, StoreError> {
    if !file.exists() {
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(file, EMPTY_CATALOG_DOC)?;
        info!(file = %file.display(), "card catalog initialized");
    }
    let raw = fs::read_to_string(file)?;
    match serde_json::from_str::<CatalogFile>(&raw) {
        Ok(doc) => Ok(doc.cards),
        Err(err) => {
            warn!(
                file = %file.display(),
                error = %err,
                "corrupt card catalog, rewriting empty skeleton"
            );
            fs::write(file, EMPTY_CATALOG_DOC)?;
            Ok(Vec::new())
        }
    }
}
