use serde::{Deserialize, Serialize};

/// Un álbum tal como se persiste en disco.
///
/// `track_count` no se valida contra `track_list`: cualquier combinación es válida.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub track_count: i64,
    pub track_list: Vec<String>,
    pub rating: f64,
}

impl Album {
    /// Crea un álbum tomando `track_count` de la longitud de la lista.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        track_list: Vec<String>,
        rating: f64,
    ) -> Self {
        Album {
            title: title.into(),
            artist: artist.into(),
            track_count: track_list.len() as i64,
            track_list,
            rating,
        }
    }
}
