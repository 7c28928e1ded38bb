use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use discvault_core::{Album, ArchivePaths, RecordCollection, RecordStore, StoreConfig, print_collection};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let paths = ArchivePaths::new()?;
    let config = StoreConfig::load_or_default(&paths.settings_file)?;
    let store = RecordStore::new(&paths, config);
    info!("Archivo de álbumes: {}", store.path().display());

    // Empezar sin archivo previo: cargar ahora no devuelve nada
    store.clear()?;
    info!("Sin archivo previo, carga: {:?}", store.load_or_none());

    let mut albums: RecordCollection = Some(sample_albums());

    // Guardar
    store.save_or_log(albums.as_deref());
    print_collection(albums.as_deref());

    // Vaciar para comprobar que la carga funciona
    albums = None;
    print_collection(albums.as_deref());

    // Cargar
    if let Some(stored) = store.load_or_none() {
        albums = Some(stored);
    }
    print_collection(albums.as_deref());

    Ok(())
}

fn sample_albums() -> Vec<Album> {
    let justice = Album {
        title: "... And Justice For All".to_string(),
        artist: "Metallica".to_string(),
        track_count: 9,
        track_list: [
            "Blackened",
            "... And Justice For All",
            "Eye of the Beholder",
            "One",
            "The Shortest Straw",
            "Harvester of Sorrow",
            "The Frayed Ends of Sanity",
            "To Live Is to Die",
            "Dyers Eve",
        ]
        .map(String::from)
        .to_vec(),
        rating: 5.0,
    };

    let dreams = Album {
        title: "In Between Dreams".to_string(),
        artist: "Jack Johnson".to_string(),
        track_count: 14,
        track_list: [
            "Better Together",
            "Never Know",
            "Banana Pancakes",
            "Good People",
            "No Other Way",
            "Sitting, Waiting, Wishing",
            "Staple It Together",
            "Situations",
            "Crying Shame",
            "If I Could",
            "Breakdown",
            "Belle",
            "Do You Remember",
            "Constellations",
        ]
        .map(String::from)
        .to_vec(),
        rating: 4.5,
    };

    vec![justice, dreams]
}
