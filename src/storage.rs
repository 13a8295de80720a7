use crate::model::{PersistedState, RosterMember, RosterState};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Identifiant fixe du document d'état.
pub const STORAGE_KEY: &str = "ronda_roster_v1";

pub trait Storage {
    /// Charge l'état persisté. `Ok(None)` si rien n'a encore été sauvegardé.
    fn load(&self) -> anyhow::Result<Option<PersistedState>>;
    /// Sauvegarde de manière atomique.
    fn save(&self, state: &RosterState) -> anyhow::Result<()>;
    /// Met de côté un document illisible avant qu'une sauvegarde ne l'écrase.
    /// Renvoie l'emplacement de la copie, `None` s'il n'y avait rien à conserver.
    fn preserve_unreadable(&self) -> anyhow::Result<Option<PathBuf>>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Document `<dir>/ronda_roster_v1.json`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::open(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<path>.bak`
    pub fn backup_path(&self) -> PathBuf {
        let mut raw = OsString::from(self.path.as_os_str());
        raw.push(".bak");
        PathBuf::from(raw)
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Option<PersistedState>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let value: Value = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        decode_state(value).map(Some)
    }

    fn save(&self, state: &RosterState) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(state)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }

    fn preserve_unreadable(&self) -> anyhow::Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.backup_path();
        fs::rename(&self.path, &backup).with_context(|| {
            format!("moving {} to {}", self.path.display(), backup.display())
        })?;
        Ok(Some(backup))
    }
}

/// Décode champ par champ : un champ illisible est ignoré (journalisé), les autres sont conservés.
pub fn decode_state(value: Value) -> anyhow::Result<PersistedState> {
    let Value::Object(mut obj) = value else {
        bail!("state document is not a JSON object");
    };
    Ok(PersistedState {
        members: take_members(&mut obj),
        anchor_index: take_field(&mut obj, "anchor_index"),
        anchor_period: take_field(&mut obj, "anchor_period"),
    })
}

/// Membres décodés un par un : une entrée invalide est écartée, les autres conservées.
fn take_members(obj: &mut Map<String, Value>) -> Option<Vec<RosterMember>> {
    let Value::Array(items) = obj.remove("members")? else {
        tracing::warn!(field = "members", "ignoring non-array members field in saved state");
        return None;
    };
    let members = items
        .into_iter()
        .enumerate()
        .filter_map(|(pos, item)| match serde_json::from_value::<RosterMember>(item) {
            Ok(member) => Some(member),
            Err(err) => {
                tracing::warn!(position = pos, error = %err, "skipping invalid member in saved state");
                None
            }
        })
        .collect();
    Some(members)
}

fn take_field<T: DeserializeOwned>(obj: &mut Map<String, Value>, key: &str) -> Option<T> {
    let raw = obj.remove(key)?;
    match serde_json::from_value(raw) {
        Ok(v) => Some(v),
        Err(err) => {
            tracing::warn!(field = key, error = %err, "ignoring malformed field in saved state");
            None
        }
    }
}
