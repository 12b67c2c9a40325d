//! Player persistence: a checksummed, versioned binary record format, an
//! in-memory store for tests, and per-player mutation serialization.
//!
//! Record format:
//! - Magic (8 bytes)
//! - Format version (2 bytes)
//! - Payload length (4 bytes)
//! - Bincode-serialized player (variable)
//! - SHA-256 over everything above (32 bytes)
//!
//! Every save performs an optimistic revision check against the stored
//! record, restoring the at-most-one-concurrent-mutation guarantee across
//! processes; `SessionManager` adds a per-player mutex for callers inside
//! one process.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use sha2::{Digest, Sha256};

use crate::constants::{SAVE_FORMAT_VERSION, SAVE_MAGIC};
use crate::error::{GameError, GameResult};
use crate::player::Player;

pub trait PlayerStore {
    fn load(&self, player_id: &str) -> GameResult<Player>;

    /// Persists the player, bumping its revision. Fails with
    /// [`GameError::StateConflict`] when the stored revision no longer
    /// matches the loaded one.
    fn save(&self, player: &mut Player) -> GameResult<()>;

    fn exists(&self, player_id: &str) -> bool;
}

fn invalid_data(msg: impl Into<String>) -> GameError {
    GameError::Persistence(io::Error::new(io::ErrorKind::InvalidData, msg.into()))
}

/// Serializes a player into the framed record format.
fn encode_record(player: &Player) -> GameResult<Vec<u8>> {
    let payload = bincode::serialize(player)
        .map_err(|e| invalid_data(format!("serialize failed: {e}")))?;
    let len = payload.len() as u32;

    let mut record = Vec::with_capacity(14 + payload.len() + 32);
    record.extend_from_slice(&SAVE_MAGIC.to_le_bytes());
    record.extend_from_slice(&SAVE_FORMAT_VERSION.to_le_bytes());
    record.extend_from_slice(&len.to_le_bytes());
    record.extend_from_slice(&payload);

    let mut hasher = Sha256::new();
    hasher.update(&record);
    record.extend_from_slice(&hasher.finalize());
    Ok(record)
}

/// Parses and verifies a framed record, routing old versions through the
/// migration table.
fn decode_record(mut reader: impl Read) -> GameResult<Player> {
    let mut header = [0u8; 14];
    reader
        .read_exact(&mut header)
        .map_err(GameError::Persistence)?;

    let magic = u64::from_le_bytes(header[0..8].try_into().expect("fixed slice"));
    if magic != SAVE_MAGIC {
        return Err(invalid_data(format!(
            "bad save magic: expected 0x{SAVE_MAGIC:016X}, got 0x{magic:016X}"
        )));
    }
    let version = u16::from_le_bytes(header[8..10].try_into().expect("fixed slice"));
    let len = u32::from_le_bytes(header[10..14].try_into().expect("fixed slice"));

    let mut payload = vec![0u8; len as usize];
    reader
        .read_exact(&mut payload)
        .map_err(GameError::Persistence)?;

    let mut stored_checksum = [0u8; 32];
    reader
        .read_exact(&mut stored_checksum)
        .map_err(GameError::Persistence)?;

    let mut hasher = Sha256::new();
    hasher.update(header);
    hasher.update(&payload);
    if stored_checksum != hasher.finalize().as_slice() {
        return Err(invalid_data("checksum verification failed"));
    }

    migrate(version, &payload)
}

/// Migration table for older record versions. Version 1 is current; there
/// are no older versions in the wild yet, so anything else is rejected.
fn migrate(version: u16, payload: &[u8]) -> GameResult<Player> {
    match version {
        SAVE_FORMAT_VERSION => bincode::deserialize(payload)
            .map_err(|e| invalid_data(format!("deserialize failed: {e}"))),
        other => Err(invalid_data(format!(
            "unsupported save version {other} (current: {SAVE_FORMAT_VERSION})"
        ))),
    }
}

/// One file per player under the platform data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "greenvale").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;
        Self::at(project_dirs.data_dir().to_path_buf())
    }

    /// Store rooted at an explicit directory (tests, servers with their own
    /// layout).
    pub fn at(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, player_id: &str) -> PathBuf {
        self.dir.join(format!("{player_id}.sav"))
    }

    fn stored_revision(&self, player_id: &str) -> GameResult<Option<u64>> {
        if !self.exists(player_id) {
            return Ok(None);
        }
        Ok(Some(self.load(player_id)?.revision))
    }
}

impl PlayerStore for FileStore {
    fn load(&self, player_id: &str) -> GameResult<Player> {
        let file = fs::File::open(self.path_for(player_id)).map_err(GameError::Persistence)?;
        decode_record(io::BufReader::new(file))
    }

    fn save(&self, player: &mut Player) -> GameResult<()> {
        if let Some(found) = self.stored_revision(&player.id)? {
            if found != player.revision {
                return Err(GameError::StateConflict {
                    player_id: player.id.clone(),
                    expected: player.revision,
                    found,
                });
            }
        }
        player.revision += 1;

        let record = encode_record(player)?;
        let mut file =
            fs::File::create(self.path_for(&player.id)).map_err(GameError::Persistence)?;
        file.write_all(&record).map_err(GameError::Persistence)?;
        Ok(())
    }

    fn exists(&self, player_id: &str) -> bool {
        self.path_for(player_id).exists()
    }
}

/// Heap-backed store for tests and simulations.
#[derive(Default)]
pub struct MemoryStore {
    players: Mutex<HashMap<String, Player>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for MemoryStore {
    fn load(&self, player_id: &str) -> GameResult<Player> {
        self.players
            .lock()
            .expect("store lock poisoned")
            .get(player_id)
            .cloned()
            .ok_or_else(|| {
                GameError::Persistence(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no player {player_id}"),
                ))
            })
    }

    fn save(&self, player: &mut Player) -> GameResult<()> {
        let mut players = self.players.lock().expect("store lock poisoned");
        if let Some(stored) = players.get(&player.id) {
            if stored.revision != player.revision {
                return Err(GameError::StateConflict {
                    player_id: player.id.clone(),
                    expected: player.revision,
                    found: stored.revision,
                });
            }
        }
        player.revision += 1;
        players.insert(player.id.clone(), player.clone());
        Ok(())
    }

    fn exists(&self, player_id: &str) -> bool {
        self.players
            .lock()
            .expect("store lock poisoned")
            .contains_key(player_id)
    }
}

/// Serializes the load-mutate-save cycle per player id. Different players
/// proceed in parallel; two requests for the same player queue on its
/// mutex, so the revision check only ever fails across processes.
pub struct SessionManager<S: PlayerStore> {
    store: S,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: PlayerStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn lock_for(&self, player_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().expect("lock table poisoned");
        locks
            .entry(player_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Runs one action against the player: load, mutate, save. The action's
    /// error aborts the cycle without persisting anything.
    pub fn with_player<T>(
        &self,
        player_id: &str,
        action: impl FnOnce(&mut Player) -> GameResult<T>,
    ) -> GameResult<T> {
        let lock = self.lock_for(player_id);
        let _guard = lock.lock().expect("player lock poisoned");

        let mut player = self.store.load(player_id)?;
        let result = action(&mut player)?;
        self.store.save(&mut player)?;
        Ok(result)
    }

    /// Registers a brand-new player record.
    pub fn register(&self, mut player: Player) -> GameResult<String> {
        let id = player.id.clone();
        let lock = self.lock_for(&id);
        let _guard = lock.lock().expect("player lock poisoned");
        self.store.save(&mut player)?;
        Ok(id)
    }
}
