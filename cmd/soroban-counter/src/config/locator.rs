use directories::UserDirs;
use std::{
    env,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Directory searched for in the current directory and its ancestors.
pub const LOCAL_DIR: &str = ".soroban-counter";
pub const CONFIG_FILE: &str = "config.toml";
/// Overrides the global config directory.
pub const CONFIG_HOME_ENV: &str = "SOROBAN_CONFIG_HOME";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to find home directory")]
    HomeDirNotFound,
    #[error("Failed read current directory")]
    CurrentDirNotFound,
    #[error("XDG_CONFIG_HOME env variable is not a valid path. Got {0}")]
    XdgConfigHome(String),
    #[error("Failed to read file: {path}: {error}")]
    FileRead { path: PathBuf, error: std::io::Error },
    #[error("Failed to parse config file: {path}: {error}")]
    Toml {
        path: PathBuf,
        error: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Local(PathBuf),
    Global(PathBuf),
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?}",
            match self {
                Location::Local(_) => "Local",
                Location::Global(_) => "Global",
            },
            self.as_ref()
        )
    }
}

impl AsRef<Path> for Location {
    fn as_ref(&self) -> &Path {
        match self {
            Location::Local(p) | Location::Global(p) => p.as_path(),
        }
    }
}

impl Location {
    pub fn config_file(&self) -> PathBuf {
        self.as_ref().join(CONFIG_FILE)
    }
}

/// The nearest `.soroban-counter` directory at or above `pwd`.
pub fn find_config_dir(mut pwd: PathBuf) -> Option<PathBuf> {
    loop {
        let dir = pwd.join(LOCAL_DIR);
        if dir.is_dir() {
            return Some(dir);
        }
        if !pwd.pop() {
            return None;
        }
    }
}

pub fn global_config_path() -> Result<PathBuf, Error> {
    if let Ok(config_home) = env::var(CONFIG_HOME_ENV) {
        return Ok(PathBuf::from(config_home));
    }

    let config_dir = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from_str(&config_home).map_err(|_| Error::XdgConfigHome(config_home))?
    } else {
        UserDirs::new()
            .ok_or(Error::HomeDirNotFound)?
            .home_dir()
            .join(".config")
    };

    Ok(config_dir.join("soroban-counter"))
}

/// Local config if one exists above the current directory, otherwise global.
pub fn locate() -> Result<Location, Error> {
    let pwd = env::current_dir().map_err(|_| Error::CurrentDirNotFound)?;
    match find_config_dir(pwd) {
        Some(dir) => Ok(Location::Local(dir)),
        None => Ok(Location::Global(global_config_path()?)),
    }
}
