use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{Player, PlayerId};
use crate::store::errors::StoreError;

/// Скелет пустого документа.
const EMPTY_PLAYERS_DOC: &str = "{\"players\":[]}";

/// Формат файла `data/players.json`.
#[derive(Debug, Serialize, Deserialize)]
struct PlayersFile {
    players: Vec<Player>,
}

/// Хранилище игроков: один JSON-документ, переписываемый целиком
/// при каждой мутации.
#[derive(Debug)]
pub struct PlayerStore {
    dir: PathBuf,
    file: PathBuf,
}

impl PlayerStore {
    /// Открыть хранилище под `base`: файл — `base/data/players.json`.
    /// Если файла или директории нет — создать скелет. Идемпотентно.
    pub fn open(base: &Path) -> Result<Self, StoreError> {
        let dir = base.join("data");
        let file = dir.join("players.json");
        let store = Self { dir, file };
        store.ensure_file()?;
        Ok(store)
    }

    /// Путь к самому документу (для тестов и диагностики).
    pub fn file_path(&self) -> &Path {
        &self.file
    }

    fn ensure_file(&self) -> Result<(), StoreError> {
        if !self.file.exists() {
            fs::create_dir_all(&self.dir)?;
            fs::write(&self.file, EMPTY_PLAYERS_DOC)?;
            info!(file = %self.file.display(), "players store initialized");
        }
        Ok(())
    }

    /// Прочитать весь список игроков.
    ///
    /// Битый JSON не считается ошибкой: документ переписывается пустым
    /// скелетом, возвращается пустой список (политика восстановления
    /// для одно-тенантного кэша без бэкапа).
    pub fn list(&self) -> Result<Vec<Player>, StoreError> {
        let raw = fs::read_to_string(&self.file)?;
        match serde_json::from_str::<PlayersFile>(&raw) {
            Ok(doc) => Ok(doc.players),
            Err(err) => {
                warn!(
                    file = %self.file.display(),
                    error = %err,
                    "corrupt players document, rewriting empty skeleton"
                );
                fs::write(&self.file, EMPTY_PLAYERS_DOC)?;
                Ok(Vec::new())
            }
        }
    }

    /// Линейный поиск по id.
    pub fn find_by_id(&self, id: PlayerId) -> Result<Player, StoreError> {
        self.list()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::PlayerNotFound(id))
    }

    /// Линейный поиск по имени. Имена НЕ уникальны (два разных id могут
    /// носить одно отображаемое имя) — возвращается первое совпадение
    /// в порядке файла.
    pub fn find_by_name(&self, name: &str) -> Result<Player, StoreError> {
        self.list()?
            .into_iter()
            .find(|p| p.username == name)
            .ok_or_else(|| StoreError::PlayerNameNotFound(name.to_string()))
    }

    /// Создать игрока: пустая рука, без колод, активная колода не выбрана.
    /// Повторный вызов с тем же id — ошибка, дубликатов строк не бывает.
    pub fn create(&mut self, username: &str, id: PlayerId) -> Result<Player, StoreError> {
        let mut players = self.list()?;
        if players.iter().any(|p| p.id == id) {
            return Err(StoreError::PlayerExists(id));
        }
        let player = Player::new(username, id);
        players.push(player.clone());
        self.write_all(players)?;
        info!(id, username, "player created");
        Ok(player)
    }

    /// Сохранить игрока: заменить строку с тем же id и переписать файл.
    /// Если строки нет — дописать в конец (чтобы свежесозданный in-memory
    /// игрок не терялся молча).
    pub fn save(&mut self, player: &Player) -> Result<(), StoreError> {
        let mut players = self.list()?;
        match players.iter_mut().find(|p| p.id == player.id) {
            Some(row) => *row = player.clone(),
            None => players.push(player.clone()),
        }
        self.write_all(players)?;
        debug!(id = player.id, "player saved");
        Ok(())
    }

    fn write_all(&self, players: Vec<Player>) -> Result<(), StoreError> {
        let doc = PlayersFile { players };
        fs::write(&self.file, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }

    /// Снести директорию `data/` целиком. Необратимо.
    pub fn wipe_all(&mut self) -> Result<(), StoreError> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
            info!(dir = %self.dir.display(), "player data wiped");
        }
        Ok(())
    }

    /// Пересоздать скелет, если файл был удалён; иначе no-op.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.ensure_file()
    }
}
