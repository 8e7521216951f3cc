use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub ordered_marker: OrderedMarker,
}

/// Which line prefix opens an ordered-list item.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderedMarker {
    /// `* item`; `- item` stays unordered.
    #[default]
    Asterisk,
    /// `1. item`; both `- ` and `* ` are unordered.
    Numeric,
}

const CANDIDATE_NAMES: &[&str] = &[".md2html.toml", "md2html.toml"];

fn parse_config_str(s: &str, path: &Path) -> Result<Config, Error> {
    toml::from_str::<Config>(s).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn read_config(path: &Path) -> Result<Config, Error> {
    let s = fs::read_to_string(path)?;
    parse_config_str(&s, path)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .md2html.toml, md2html.toml
/// 3) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<(Config, Option<PathBuf>), Error> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring config: {e}"),
        }
    }

    Ok((Config::default(), None))
}
