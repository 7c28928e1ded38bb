use std::fmt::{self, Write};

use crate::model::Album;

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Artist: {}", self.artist)?;
        writeln!(f, "Track Count: {}", self.track_count)?;
        writeln!(f, "Track List: {:?}", self.track_list)?;
        writeln!(f, "Rating: {:?}", self.rating)
    }
}

/// Texto legible de la colección, o `No albums.` si no hay ninguna cargada.
pub fn render_collection(albums: Option<&[Album]>) -> String {
    let mut out = String::new();

    match albums {
        Some(albums) => {
            for album in albums {
                // escribir en un String no falla
                let _ = writeln!(out, "{album}");
            }
        }
        None => out.push_str("No albums.\n"),
    }

    out.push_str("\n---\n");
    out
}

pub fn print_collection(albums: Option<&[Album]>) {
    println!("{}", render_collection(albums));
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn renders_each_field() {
        let album = Album::new("X", "Y", vec!["a".into(), "b".into()], 3.5);

        assert_eq!(
            album.to_string(),
            indoc! {r#"
                Title: X
                Artist: Y
                Track Count: 2
                Track List: ["a", "b"]
                Rating: 3.5
            "#}
        );
    }

    #[test]
    fn whole_ratings_keep_the_decimal() {
        let album = Album::new("X", "Y", vec![], 5.0);
        assert!(album.to_string().ends_with("Rating: 5.0\n"));
    }

    #[test]
    fn absent_collection_placeholder() {
        assert_eq!(render_collection(None), "No albums.\n\n---\n");
    }

    #[test]
    fn empty_collection_is_just_the_separator() {
        assert_eq!(render_collection(Some(&[])), "\n---\n");
    }

    #[test]
    fn albums_are_separated_by_blank_lines() {
        let albums = [Album::new("A", "B", vec![], 1.0), Album::new("C", "D", vec![], 2.0)];
        let out = render_collection(Some(&albums));

        assert!(out.starts_with("Title: A\n"));
        assert!(out.contains("Rating: 1.0\n\nTitle: C\n"));
        assert!(out.ends_with("Rating: 2.0\n\n\n---\n"));
    }
}
