//! # Book Client
//!
//! Provides a high-level API for interacting with the `Book` catalog actor.
//! It wraps a `ResourceClient<Book>` and exposes it as a [`BookRepository`].
use crate::book_actor::BookError;
use crate::clients::BookRepository;
use crate::model::{Book, BookId};
use async_trait::async_trait;
use cyprus_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Book actor.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl BookClient {
    pub fn new(inner: ResourceClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BookError::from(e)
    }
}

#[async_trait]
impl BookRepository for BookClient {
    #[instrument(skip(self))]
    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        let books = self.list().await?;
        debug!(count = books.len(), "Books listed");
        Ok(books)
    }

    #[instrument(skip(self), fields(book_id = %id))]
    async fn get_book_by_id(&self, id: BookId) -> Result<Book, BookError> {
        debug!("Sending request");
        self.get(id).await?.ok_or(BookError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyprus_framework::mock::{create_mock_client, expect_get, MockClient};

    #[tokio::test]
    async fn test_get_book_by_id_maps_missing_to_not_found() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_get(BookId(1))
            .return_ok(Some(Book::new(1, "Book 1", "Author 1")));
        mock.expect_get(BookId(999)).return_ok(None);

        let client = BookClient::new(mock.client());

        let book = client.get_book_by_id(BookId(1)).await.unwrap();
        assert_eq!(book.title, "Book 1");

        let missing = client.get_book_by_id(BookId(999)).await;
        assert_eq!(missing, Err(BookError::NotFound(BookId(999))));

        mock.verify();
    }

    #[tokio::test]
    async fn test_get_book_by_key_rejects_before_sending() {
        let (generic_client, mut receiver) = create_mock_client::<Book>(10);
        let client = BookClient::new(generic_client);

        let result = client.get_book_by_key("abc").await;
        assert_eq!(result, Err(BookError::InvalidId("abc".to_string())));

        // A valid key goes through to the actor.
        let lookup = tokio::spawn(async move { client.get_book_by_key("2").await });
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, BookId(2));
        responder
            .send(Ok(Some(Book::new(2, "Book 2", "Author 2"))))
            .unwrap();

        assert_eq!(lookup.await.unwrap().unwrap().author, "Author 2");
        // The invalid key never reached the channel.
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_framework_errors_map_to_communication_error() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = BookClient::new(mock.client());
        let result = client.list_books().await;
        assert_eq!(
            result,
            Err(BookError::ActorCommunicationError("Actor closed".to_string()))
        );
        mock.verify();
    }
}
