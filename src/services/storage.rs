use crate::domain::constants::{APP_DIR, SAMPLE_NAMES};
use crate::domain::models::{State, WinnerRecord};
use chrono::{Local, TimeZone};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where the roster is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum NamesSource {
    /// `$HOME/.config/luckydraw/names.txt`; the sample roster stands in
    /// until the file exists.
    Default(PathBuf),
    File(PathBuf),
    Stdin,
}

impl NamesSource {
    pub fn from_arg(arg: Option<&str>) -> anyhow::Result<Self> {
        match arg {
            Some("-") => Ok(NamesSource::Stdin),
            Some(p) => Ok(NamesSource::File(PathBuf::from(p))),
            None => Ok(NamesSource::Default(names_path()?)),
        }
    }

    pub fn writable_path(&self) -> Option<&Path> {
        match self {
            NamesSource::Default(p) | NamesSource::File(p) => Some(p),
            NamesSource::Stdin => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            NamesSource::Default(p) if !p.exists() => "sample".to_string(),
            NamesSource::Default(p) | NamesSource::File(p) => p.to_string_lossy().to_string(),
            NamesSource::Stdin => "stdin".to_string(),
        }
    }
}

pub fn app_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR))
}

fn state_path() -> anyhow::Result<PathBuf> {
    Ok(app_dir()?.join("state.json"))
}

fn names_path() -> anyhow::Result<PathBuf> {
    Ok(app_dir()?.join("names.txt"))
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Local wall-clock time (`HH:MM:SS`) of a millisecond timestamp.
pub fn clock_time(ms: u64) -> String {
    match i64::try_from(ms)
        .ok()
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
    {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}

pub fn audit(action: &str, data: serde_json::Value) {
    let path = match app_dir() {
        Ok(dir) => dir.join("audit.jsonl"),
        Err(_) => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": now_ms(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let res = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
    if let Err(e) = res {
        log::debug!("audit write to {} failed: {}", path.display(), e);
    }
}

/// Advisory lock guarding `state.json` for the length of a draw.
pub fn spin_lock() -> anyhow::Result<fd_lock::RwLock<File>> {
    let dir = app_dir()?;
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(dir.join("spin.lock"))?;
    Ok(fd_lock::RwLock::new(file))
}

pub fn load_state() -> anyhow::Result<State> {
    let p = state_path()?;
    if !p.exists() {
        return Ok(State::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_state(s: &State) -> anyhow::Result<()> {
    let p = state_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(s)?)?;
    Ok(())
}

/// Newest entries go first.
pub fn record_winner(state: &mut State, record: WinnerRecord) {
    state.rotation = record.rotation;
    state.history.insert(0, record);
}

pub fn read_names_text(source: &NamesSource) -> anyhow::Result<String> {
    match source {
        NamesSource::Default(p) if !p.exists() => Ok(SAMPLE_NAMES.join("\n")),
        NamesSource::Default(p) | NamesSource::File(p) => Ok(std::fs::read_to_string(p)?),
        NamesSource::Stdin => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

pub fn write_names(path: &Path, names: &[String]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut body = names.join("\n");
    body.push('\n');
    std::fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, rotation: f64) -> WinnerRecord {
        WinnerRecord {
            name: name.to_string(),
            message: format!("hi {name}"),
            timestamp: 1,
            rotation,
            index: 0,
            segment_count: 2,
        }
    }

    #[test]
    fn record_winner_prepends_and_keeps_rotation() {
        let mut state = State::default();
        record_winner(&mut state, record("A", 40.0));
        record_winner(&mut state, record("B", 90.5));
        assert_eq!(state.history[0].name, "B");
        assert_eq!(state.history[1].name, "A");
        assert_eq!(state.rotation, 90.5);
    }

    #[test]
    fn state_without_rotation_field_still_loads() {
        let state: State = serde_json::from_str(r#"{"history": []}"#).expect("parse");
        assert_eq!(state.rotation, 0.0);
    }

    #[test]
    fn stdin_source_is_not_writable() {
        assert!(NamesSource::Stdin.writable_path().is_none());
        let file = NamesSource::File(PathBuf::from("names.txt"));
        assert_eq!(file.writable_path(), Some(Path::new("names.txt")));
    }

    #[test]
    fn clock_time_is_hours_minutes_seconds() {
        let t = clock_time(1_700_000_000_123);
        let parts: Vec<&str> = t.split(':').collect();
        assert_eq!(parts.len(), 3, "unexpected clock format {t}");
        assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));
        assert_eq!(clock_time(1_700_000_000_123), clock_time(1_700_000_000_999));
    }

    #[test]
    fn second_spin_lock_is_refused_while_first_is_held() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("spin.lock");
        let open = || {
            OpenOptions::new()
                .create(true)
                .truncate(false)
                .read(true)
                .write(true)
                .open(&path)
                .expect("open lock file")
        };
        let mut first = fd_lock::RwLock::new(open());
        let mut second = fd_lock::RwLock::new(open());
        let held = first.try_write().expect("first lock");
        match second.try_write() {
            Ok(_) => panic!("second lock must fail while the first is held"),
            Err(err) => assert_eq!(err.kind(), std::io::ErrorKind::WouldBlock),
        }
        drop(held);
        assert!(second.try_write().is_ok());
    }

    #[test]
    fn write_names_ends_with_newline() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("nested/names.txt");
        write_names(&path, &["A".to_string(), "B".to_string()]).expect("write");
        assert_eq!(std::fs::read_to_string(path).expect("read"), "A\nB\n");
    }
}
