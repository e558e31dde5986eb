//! The album record and the fixed startup catalog.

use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// `id` is supplied by the caller and is not required to be unique.
/// `price` is expressed in the smallest currency unit (cents).
///
/// Deserialization is lenient: keys match case-insensitively, absent fields
/// and `null` values leave the zero value, and unknown keys are skipped. A
/// value of the wrong type is still an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: i64,
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Bind the first JSON value in `body`; anything after it is ignored.
    pub fn from_json_prefix(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::Deserializer::from_slice(body)
            .into_iter::<Album>()
            .next()
        {
            Some(result) => result,
            // Empty or whitespace-only body; reports the EOF error.
            None => serde_json::from_slice(body),
        }
    }
}

enum Field {
    Id,
    Title,
    Artist,
    Price,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        [
            ("id", Field::Id),
            ("title", Field::Title),
            ("artist", Field::Artist),
            ("price", Field::Price),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, field)| field)
    }
}

struct AlbumVisitor;

impl<'de> Visitor<'de> for AlbumVisitor {
    type Value = Album;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an album object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Album, A::Error> {
        let mut album = Album::default();
        while let Some(key) = map.next_key::<String>()? {
            // null keeps whatever the field already holds
            match Field::from_key(&key) {
                Some(Field::Id) => {
                    if let Some(v) = map.next_value()? {
                        album.id = v;
                    }
                }
                Some(Field::Title) => {
                    if let Some(v) = map.next_value()? {
                        album.title = v;
                    }
                }
                Some(Field::Artist) => {
                    if let Some(v) = map.next_value()? {
                        album.artist = v;
                    }
                }
                Some(Field::Price) => {
                    if let Some(v) = map.next_value()? {
                        album.price = v;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(album)
    }
}

impl<'de> Deserialize<'de> for Album {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AlbumVisitor)
    }
}

/// The three albums every freshly started catalog holds, in order.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 5699),
        Album::new("2", "Jeru", "Gerry Mulligan", 1799),
        Album::new("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 3999),
    ]
}
