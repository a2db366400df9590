//! Drives the assembled admin against the reference backend over real HTTP.

use configuration::Config;
use core_types::{BaseAttributes, RecordId};
use heroes_admin::{Route, assemble};
use heroes_server::{RaceStore, StoredRace};
use std::sync::Arc;
use views::{FailureKind, MemoryNotifier, Treatment};

fn stored(id: u64, name: &str, description: &str, [strength, agility, intelligence, willpower]: [u32; 4]) -> StoredRace {
    StoredRace {
        id,
        name: name.to_string(),
        description: description.to_string(),
        base_attributes: BaseAttributes {
            strength,
            agility,
            intelligence,
            willpower,
        },
    }
}

/// Starts the backend on a free port and returns a config pointing at it.
async fn spawn_backend(races: Vec<StoredRace>, page_size: u32) -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let store = RaceStore::new(races).unwrap();
    tokio::spawn(heroes_server::serve(listener, store));

    let mut config = Config::default();
    config.api.base_url = format!("http://{addr}");
    config.pagination.page_size = page_size;
    config
}

#[tokio::test]
async fn lists_then_opens_a_race_and_goes_back() {
    let config = spawn_backend(
        vec![
            stored(1, "Elf", "Forest dweller", [3, 8, 7, 5]),
            stored(2, "Dwarf", "Mountain folk", [7, 3, 4, 8]),
        ],
        10,
    )
    .await;
    let notifier = Arc::new(MemoryNotifier::new());
    let mut navigator = assemble(&config, notifier.clone()).unwrap();

    navigator.navigate(Route::Listing).await;
    let rows = navigator.list().rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells, ["Elf", "Forest dweller", "3", "8", "7", "5"]);
    assert_eq!(rows[0].action.id, RecordId::from(1));
    assert!(navigator.render().contains("Page 1 of 1 (2 records)"));

    assert!(navigator.open_row(1).await);
    let sections = navigator.detail().sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].value, "Dwarf");
    assert_eq!(sections[1].treatment, Treatment::Tag);
    assert!(!navigator.render().contains("Strength"));

    assert!(navigator.back().await);
    assert_eq!(navigator.current(), Some(&Route::Listing));
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn pages_through_the_collection() {
    let races = (1..=5)
        .map(|id| stored(id, &format!("Race {id}"), "", [1, 1, 1, 1]))
        .collect();
    let config = spawn_backend(races, 2).await;
    let mut navigator = assemble(&config, Arc::new(MemoryNotifier::new())).unwrap();

    navigator.navigate(Route::Listing).await;
    assert!(navigator.next_page().await);
    assert!(navigator.next_page().await);

    let names: Vec<_> = navigator.list().rows().into_iter().map(|r| r.cells[0].clone()).collect();
    assert_eq!(names, ["Race 5"]);
    assert_eq!(navigator.list().footer().as_deref(), Some("Page 3 of 3 (5 records)"));
    assert!(!navigator.next_page().await);
}

#[tokio::test]
async fn missing_and_malformed_ids_surface_as_failures() {
    let config = spawn_backend(vec![stored(1, "Elf", "Forest dweller", [3, 8, 7, 5])], 10).await;
    let notifier = Arc::new(MemoryNotifier::new());
    let mut navigator = assemble(&config, notifier.clone()).unwrap();

    navigator.open(RecordId::from(1)).await;
    navigator.open(RecordId::from(99)).await;
    assert_eq!(navigator.detail().state().failure().map(|f| f.kind), Some(FailureKind::NotFound));
    assert!(navigator.detail().sections().is_empty());

    // The backend only knows numeric ids and answers 400 for anything else.
    navigator.open(RecordId::from("elf")).await;
    assert_eq!(navigator.detail().state().failure().map(|f| f.kind), Some(FailureKind::NetworkFailure));

    assert_eq!(notifier.drain().len(), 2);
}

#[tokio::test]
async fn unreachable_backend_renders_an_empty_list() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut config = Config::default();
    config.api.base_url = format!("http://{addr}");
    let notifier = Arc::new(MemoryNotifier::new());
    let mut navigator = assemble(&config, notifier.clone()).unwrap();

    navigator.navigate(Route::Listing).await;

    assert!(navigator.has_failed());
    assert!(navigator.list().rows().is_empty());
    assert_eq!(notifier.notifications().len(), 1);
}
