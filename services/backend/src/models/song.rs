use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key the song collection lives under when the file is wrapped in an object.
pub const COLLECTION_KEY: &str = "sarkilar";

/// One song as it appears in the catalog file. Fields are passed through untouched.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct SongRecord(pub Value);

impl From<Value> for SongRecord {
    fn from(value: Value) -> Self {
        SongRecord(value)
    }
}

/// Top-level shape of the catalog file, decided once at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDocument {
    /// `{"sarkilar": {"<id>": {...}, ...}}`
    MapOfMap(Map<String, Value>),
    /// `{"sarkilar": [{...}, ...]}`
    MapOfList(Vec<Value>),
    /// `[{...}, ...]`
    BareList(Vec<Value>),
    /// Anything else, including a collection key holding a scalar.
    Other(Value),
}

impl RawDocument {
    pub fn classify(raw: Value) -> Self {
        match raw {
            Value::Object(mut root) => match root.remove(COLLECTION_KEY) {
                Some(Value::Object(songs)) => RawDocument::MapOfMap(songs),
                Some(Value::Array(songs)) => RawDocument::MapOfList(songs),
                Some(other) => RawDocument::Other(other),
                None => RawDocument::Other(Value::Object(root)),
            },
            Value::Array(songs) => RawDocument::BareList(songs),
            other => RawDocument::Other(other),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            RawDocument::MapOfMap(_) => "map-of-map",
            RawDocument::MapOfList(_) => "map-of-list",
            RawDocument::BareList(_) => "bare-list",
            RawDocument::Other(_) => "unrecognised",
        }
    }

    /// Flatten into songs. Map values keep the file's key order; unrecognised
    /// shapes produce no songs.
    pub fn into_songs(self) -> Vec<SongRecord> {
        match self {
            RawDocument::MapOfMap(songs) => songs.into_iter().map(|(_, v)| v.into()).collect(),
            RawDocument::MapOfList(songs) | RawDocument::BareList(songs) => {
                songs.into_iter().map(SongRecord::from).collect()
            }
            RawDocument::Other(_) => Vec::new(),
        }
    }
}

pub fn normalize(raw: Value) -> Vec<SongRecord> {
    RawDocument::classify(raw).into_songs()
}
