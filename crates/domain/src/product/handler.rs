//! Handler for the create-product command.

use async_trait::async_trait;
use common::EntityId;
use store::{EntityStore, EntityStoreExt, StoreError};

use crate::outcome::Outcome;
use crate::pipeline::{HandlerResult, RequestHandler};

use super::{CreateProduct, CreateProductResponse, Product, errors};

/// Creates a product if no other product already uses its name.
///
/// The name check and the insert are separate store calls. When the store
/// enforces unique keys, a concurrent request that slips between them is
/// still rejected by `add` and reported as the same conflict.
pub struct CreateProductHandler<S> {
    store: S,
}

impl<S: EntityStore<Product>> CreateProductHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: EntityStore<Product>> RequestHandler<CreateProduct> for CreateProductHandler<S> {
    #[tracing::instrument(skip(self, command), fields(name = %command.name))]
    async fn handle(&self, command: CreateProduct) -> HandlerResult<CreateProductResponse> {
        let taken = self
            .store
            .exists(&|product: &Product| product.name == command.name)
            .await?;
        if taken {
            return Ok(Outcome::error(errors::duplicate_name(&command.name)));
        }

        let product = Product::new(
            EntityId::new(),
            command.name,
            command.description,
            command.price,
        );
        let response = CreateProductResponse {
            id: product.id,
            name: product.name.clone(),
        };

        match self.store.add(product).await {
            Ok(()) => {}
            Err(StoreError::UniqueViolation { .. }) => {
                tracing::warn!("name claimed by a concurrent request");
                return Ok(Outcome::error(errors::duplicate_name(&response.name)));
            }
            Err(e) => return Err(e.into()),
        }

        metrics::counter!("products_created_total").increment(1);
        tracing::info!(id = %response.id, "product created");

        Ok(Outcome::success(response))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use store::InMemoryStore;

    use super::*;
    use crate::error::DomainError;
    use crate::outcome::ErrorKind;

    fn keyboard() -> CreateProduct {
        CreateProduct::new("Keyboard", "Mechanical", Decimal::new(4999, 2))
    }

    #[tokio::test]
    async fn creates_product_with_submitted_fields() {
        let handler = CreateProductHandler::new(InMemoryStore::new());

        let response = handler
            .handle(keyboard())
            .await
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(response.name, "Keyboard");
        let stored = handler.store().get(response.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Keyboard");
        assert_eq!(stored.description, "Mechanical");
        assert_eq!(stored.price, Decimal::new(4999, 2));
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() {
        let handler = CreateProductHandler::new(InMemoryStore::new());
        handler.handle(keyboard()).await.unwrap();

        let outcome = handler.handle(keyboard()).await.unwrap();

        let error = outcome.first_error().unwrap();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.code(), errors::DUPLICATE_NAME);
        assert_eq!(
            error.description(),
            "A product with the name 'Keyboard' already exists."
        );
        assert_eq!(handler.store().count().await.unwrap(), 1);
    }

    /// Store whose reads never see existing records, so the handler always
    /// falls through to `add`.
    struct BlindStore(InMemoryStore<Product>);

    #[async_trait]
    impl EntityStore<Product> for BlindStore {
        async fn add(&self, record: Product) -> store::Result<()> {
            self.0.add(record).await
        }

        async fn get(&self, id: EntityId) -> store::Result<Option<Product>> {
            self.0.get(id).await
        }

        async fn find_first(
            &self,
            _filter: store::Filter<'_, Product>,
        ) -> store::Result<Option<Product>> {
            Ok(None)
        }

        async fn find_all(
            &self,
            _filter: store::Filter<'_, Product>,
        ) -> store::Result<Vec<Product>> {
            Ok(vec![])
        }

        async fn count(&self) -> store::Result<usize> {
            self.0.count().await
        }
    }

    #[tokio::test]
    async fn unique_violation_on_insert_maps_to_conflict() {
        let handler = CreateProductHandler::new(BlindStore(InMemoryStore::new()));
        handler.handle(keyboard()).await.unwrap();

        let outcome = handler.handle(keyboard()).await.unwrap();

        assert_eq!(
            outcome.first_error().unwrap().code(),
            errors::DUPLICATE_NAME
        );
        assert_eq!(handler.store().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn without_store_constraint_race_admits_duplicates() {
        let store = InMemoryStore::with_unique_constraint(false);
        let handler = CreateProductHandler::new(BlindStore(store.clone()));

        assert!(handler.handle(keyboard()).await.unwrap().is_success());
        assert!(handler.handle(keyboard()).await.unwrap().is_success());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    struct BrokenStore;

    #[async_trait]
    impl EntityStore<Product> for BrokenStore {
        async fn add(&self, _record: Product) -> store::Result<()> {
            Err(StoreError::Unavailable("disk on fire".into()))
        }

        async fn get(&self, _id: EntityId) -> store::Result<Option<Product>> {
            Ok(None)
        }

        async fn find_first(
            &self,
            _filter: store::Filter<'_, Product>,
        ) -> store::Result<Option<Product>> {
            Ok(None)
        }

        async fn find_all(
            &self,
            _filter: store::Filter<'_, Product>,
        ) -> store::Result<Vec<Product>> {
            Ok(vec![])
        }

        async fn count(&self) -> store::Result<usize> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn store_faults_propagate() {
        let handler = CreateProductHandler::new(BrokenStore);

        let result = handler.handle(keyboard()).await;

        assert!(matches!(
            result,
            Err(DomainError::Store(StoreError::Unavailable(_)))
        ));
    }
}
