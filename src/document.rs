//! Mind-map document loading.
//!
//! XMind Zen archives are ZIP containers holding a `content.json` with one
//! entry per sheet; each sheet carries a `rootTopic` tree. Only the first
//! sheet's root is used.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// Owned mind-map node. Absent labels and children deserialize to empty
/// collections so the traversal never deals with options.
#[derive(Debug, Clone)]
pub struct Topic {
    /// Child topics in document order.
    pub children: Vec<Topic>,
    /// Free-text annotations in document order.
    pub labels: Vec<String>,
    /// Display title as authored.
    pub title: String,
}

/// Raw JSON shape of one sheet in `content.json`.
#[derive(Deserialize)]
struct RawSheet {
    #[serde(rename = "rootTopic")]
    root_topic: RawTopic,
}

/// Raw JSON shape of a topic node.
#[derive(Deserialize)]
struct RawTopic {
    #[serde(default)]
    children: RawChildren,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    title: String,
}

/// Children grouped by attachment type. Detached (floating) topics are not
/// part of the tree and are ignored.
#[derive(Default, Deserialize)]
struct RawChildren {
    #[serde(default)]
    attached: Vec<RawTopic>,
}

impl From<RawTopic> for Topic {
    fn from(raw: RawTopic) -> Self {
        return Self {
            children: raw.children.attached.into_iter().map(Topic::from).collect(),
            labels: raw.labels,
            title: raw.title,
        };
    }
}

/// Open an XMind archive and return the first sheet's root topic.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened, `Error::ArchiveRead`
/// if it is not a readable ZIP container or lacks a `content.json` entry,
/// and parse errors from [`parse`].
pub fn load(path: &Path) -> Result<Topic, Error> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|err| {
        return Error::ArchiveRead {
            path: path.to_path_buf(),
            reason: err.to_string(),
        };
    })?;
    let entry = archive.by_name("content.json").map_err(|err| {
        return Error::ArchiveRead {
            path: path.to_path_buf(),
            reason: format!("content.json: {err}"),
        };
    })?;
    return parse(entry);
}

/// Parse `content.json` and return the first sheet's root topic.
///
/// # Errors
///
/// Returns `Error::JsonDe` if the content is not the expected JSON shape,
/// or `Error::DocumentCorrupt` if the document has no sheets.
fn parse(reader: impl Read) -> Result<Topic, Error> {
    let sheets: Vec<RawSheet> = serde_json::from_reader(reader)?;
    let first = sheets.into_iter().next().ok_or_else(|| {
        return Error::DocumentCorrupt {
            reason: "document has no sheets".to_string(),
        };
    })?;
    return Ok(first.root_topic.into());
}
