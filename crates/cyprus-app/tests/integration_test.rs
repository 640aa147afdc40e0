use cyprus_app::book_actor::BookError;
use cyprus_app::lifecycle::{CyprusConfig, CyprusSystem};
use cyprus_app::model::{Book, BookId};
use cyprus_app::routes::{Page, RouteError};
use std::time::Duration;
use tokio::time::Instant;

/// Full end-to-end test with the real catalog actor and its default latency.
/// Time is paused, so the 1500 ms delay is simulated rather than waited out.
#[tokio::test(start_paused = true)]
async fn test_full_navigation_flow() {
    let system = CyprusSystem::new();
    let router = system.router();
    let started = Instant::now();

    // Library: returns at once with a pending list
    let page = router.navigate("/").expect("Library route should match");
    let Page::Library(mut library) = page else {
        panic!("Expected library page");
    };
    assert!(!library.books.is_settled());

    // Still pending just before the simulated latency elapses
    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert!(!library.books.is_settled());

    let books = library.books.await.expect("Failed to list books");
    let ids: Vec<u32> = books.iter().map(|b| b.id.0).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(started.elapsed() >= Duration::from_millis(1500));

    // Player: echoes the raw id synchronously, then resolves the book
    let page = router.navigate("/player/1").expect("Player route should match");
    let Page::Player(mut player) = page else {
        panic!("Expected player page");
    };
    assert_eq!(player.book_id, "1");
    assert!(!player.book.is_settled());
    assert_eq!(player.book.await, Ok(Book::new(1, "Book 1", "Author 1")));

    // Unknown id: navigation still succeeds, the failure is in the handle
    let Page::Player(missing) = router.navigate("/player/999").unwrap() else {
        panic!("Expected player page");
    };
    assert_eq!(missing.book_id, "999");
    assert_eq!(missing.book.await, Err(BookError::NotFound(BookId(999))));

    // Malformed id
    let Page::Player(malformed) = router.navigate("/player/abc").unwrap() else {
        panic!("Expected player page");
    };
    assert_eq!(
        malformed.book.await,
        Err(BookError::InvalidId("abc".to_string()))
    );

    // Unknown path is the only synchronous failure
    assert_eq!(
        router.navigate("/settings").unwrap_err(),
        RouteError::UnknownRoute("/settings".to_string())
    );

    drop(router);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_loads_share_the_same_delay() {
    let system = CyprusSystem::new();
    let router = system.router();
    let started = Instant::now();

    let Page::Library(library) = router.navigate("/").unwrap() else {
        panic!("Expected library page");
    };
    let Page::Player(player) = router.navigate("/player/2").unwrap() else {
        panic!("Expected player page");
    };

    let (books, book) = tokio::join!(library.books, player.book);
    assert_eq!(books.unwrap().len(), 2);
    assert_eq!(book.unwrap().title, "Book 2");

    // Both replies are timed independently, not queued behind each other.
    assert!(started.elapsed() < Duration::from_millis(3000));

    drop(router);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_repository_contract_without_latency() {
    let config = CyprusConfig {
        latency_ms: 0,
        ..CyprusConfig::default()
    };
    let system = CyprusSystem::with_config(&config);
    let repository = system.repository();

    let books = repository.list_books().await.unwrap();
    assert_eq!(books.len(), 2);

    // Every listed book resolves to itself by id
    for book in &books {
        let fetched = repository.get_book_by_id(book.id).await.unwrap();
        assert_eq!(&fetched, book);
    }

    for raw in ["abc", "0", ""] {
        assert_eq!(
            repository.get_book_by_key(raw).await,
            Err(BookError::InvalidId(raw.to_string()))
        );
    }

    assert_eq!(
        repository.get_book_by_id(BookId::from(3)).await,
        Err(BookError::NotFound(BookId(3)))
    );

    drop(repository);
    system.shutdown().await.unwrap();
}

#[test]
fn test_book_error_serializes_as_message() {
    let json = serde_json::to_string(&BookError::NotFound(BookId(999))).unwrap();
    assert_eq!(json, "\"Book not found: 999\"");

    let book = serde_json::to_value(Book::new(1, "Book 1", "Author 1")).unwrap();
    assert_eq!(
        book,
        serde_json::json!({"id": 1, "title": "Book 1", "author": "Author 1"})
    );
}
