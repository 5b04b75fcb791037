//! Clients service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::clients::{
        data::ClientUpsert,
        errors::ClientsServiceError,
        records::{ClientRecord, ClientUuid},
        repository::PgClientsRepository,
        slug,
    },
};

/// Inclusive bounds for a client's logo scale percentage.
pub const LOGO_SCALE_RANGE: std::ops::RangeInclusive<i32> = 30..=200;

#[derive(Debug, Clone)]
pub struct PgClientsService {
    db: Db,
    repository: PgClientsRepository,
}

impl PgClientsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgClientsRepository::new(),
        }
    }
}

/// Normalise an upsert payload, rejecting it before it reaches the database.
///
/// # Errors
///
/// Returns an error for a blank name, an unusable or reserved slug, or a logo
/// scale outside [`LOGO_SCALE_RANGE`].
pub fn prepare_upsert(mut client: ClientUpsert) -> Result<ClientUpsert, ClientsServiceError> {
    client.name = client.name.trim().to_string();
    client.email = client.email.trim().to_string();
    client.logo = client.logo.trim().to_string();

    if client.name.is_empty() {
        return Err(ClientsServiceError::MissingRequiredData);
    }

    let source = if client.slug.trim().is_empty() {
        slug::slugify(&client.name)
    } else {
        client.slug.clone()
    };

    let finalized = slug::finalize_slug(&source);

    if !slug::is_valid(&finalized) {
        return Err(ClientsServiceError::InvalidSlug(client.slug));
    }

    if slug::is_reserved(&finalized) {
        return Err(ClientsServiceError::ReservedSlug(finalized));
    }

    if !LOGO_SCALE_RANGE.contains(&client.logo_scale) {
        return Err(ClientsServiceError::LogoScaleOutOfRange(client.logo_scale));
    }

    client.slug = finalized;

    Ok(client)
}

#[async_trait]
impl ClientsService for PgClientsService {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError> {
        let mut tx = self.db.begin().await?;

        let clients = self.repository.list_clients(&mut tx).await?;

        tx.commit().await?;

        Ok(clients)
    }

    async fn get_client(&self, slug: String) -> Result<ClientRecord, ClientsServiceError> {
        let mut tx = self.db.begin().await?;

        let client = self.repository.get_client(&mut tx, &slug).await?;

        tx.commit().await?;

        Ok(client)
    }

    async fn find_client(
        &self,
        slug: String,
        client: ClientUuid,
    ) -> Result<ClientRecord, ClientsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self.repository.find_client(&mut tx, &slug, client).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn upsert_client(
        &self,
        client: ClientUpsert,
    ) -> Result<ClientRecord, ClientsServiceError> {
        let client = prepare_upsert(client)?;

        let mut tx = self.db.begin().await?;

        let saved = self.repository.upsert_client(&mut tx, &client).await?;

        tx.commit().await?;

        info!(slug = %saved.slug, client = %saved.uuid, "client saved");

        Ok(saved)
    }

    async fn delete_client(&self, slug: String) -> Result<(), ClientsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_client(&mut tx, &slug).await?;

        if rows_affected == 0 {
            return Err(ClientsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(slug = %slug, "client deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ClientsService: Send + Sync {
    /// Retrieves all clients, newest first.
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientsServiceError>;

    /// Retrieve a client by slug alone.
    async fn get_client(&self, slug: String) -> Result<ClientRecord, ClientsServiceError>;

    /// Retrieve a client only when both slug and id match.
    async fn find_client(
        &self,
        slug: String,
        client: ClientUuid,
    ) -> Result<ClientRecord, ClientsServiceError>;

    /// Creates the client, or updates the one already holding the slug.
    async fn upsert_client(&self, client: ClientUpsert)
    -> Result<ClientRecord, ClientsServiceError>;

    /// Deletes the client with the given slug.
    async fn delete_client(&self, slug: String) -> Result<(), ClientsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::{test::TestContext, translations::Language};

    use super::*;

    #[test]
    fn prepare_upsert_derives_and_finalizes_slug() -> TestResult {
        let prepared = prepare_upsert(ClientUpsert::named("", "  Acme Architects! "))?;

        assert_eq!(prepared.slug, "acme-architects");
        assert_eq!(prepared.name, "Acme Architects!");

        Ok(())
    }

    #[test]
    fn prepare_upsert_rejects_bad_input() {
        assert!(matches!(
            prepare_upsert(ClientUpsert::named("acme", "   ")),
            Err(ClientsServiceError::MissingRequiredData)
        ));
        assert!(matches!(
            prepare_upsert(ClientUpsert::named("!!!", "Acme")),
            Err(ClientsServiceError::InvalidSlug(_))
        ));
        assert!(matches!(
            prepare_upsert(ClientUpsert::named("Admin", "Acme")),
            Err(ClientsServiceError::ReservedSlug(slug)) if slug == "admin"
        ));

        for scale in [29, 201] {
            let client = ClientUpsert {
                logo_scale: scale,
                ..ClientUpsert::named("acme", "Acme")
            };

            assert!(matches!(
                prepare_upsert(client),
                Err(ClientsServiceError::LogoScaleOutOfRange(s)) if s == scale
            ));
        }
    }

    #[tokio::test]
    async fn upsert_client_creates_with_generated_id() -> TestResult {
        let ctx = TestContext::new().await;

        let client = ctx
            .clients
            .upsert_client(ClientUpsert {
                email: "hola@acme.mx".to_string(),
                language: Language::En,
                logo_scale: 150,
                ..ClientUpsert::named("acme", "Acme")
            })
            .await?;

        assert_eq!(client.slug, "acme");
        assert_eq!(client.name, "Acme");
        assert_eq!(client.email, "hola@acme.mx");
        assert_eq!(client.language, Language::En);
        assert_eq!(client.logo_scale, 150);
        assert_ne!(client.uuid.into_uuid(), Uuid::nil());

        Ok(())
    }

    #[tokio::test]
    async fn upsert_client_updates_existing_slug_in_place() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .clients
            .upsert_client(ClientUpsert::named("acme", "Acme"))
            .await?;

        let updated = ctx
            .clients
            .upsert_client(ClientUpsert {
                invert_logo: true,
                ..ClientUpsert::named("acme", "Acme Studio")
            })
            .await?;

        assert_eq!(updated.uuid, created.uuid);
        assert_eq!(updated.name, "Acme Studio");
        assert!(updated.invert_logo);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(ctx.clients.list_clients().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn find_client_requires_matching_slug_and_id() -> TestResult {
        let ctx = TestContext::new().await;

        let acme = ctx
            .clients
            .upsert_client(ClientUpsert::named("acme", "Acme"))
            .await?;
        let other = ctx
            .clients
            .upsert_client(ClientUpsert::named("other", "Other"))
            .await?;

        let found = ctx.clients.find_client("acme".to_string(), acme.uuid).await?;

        assert_eq!(found, acme);

        let result = ctx
            .clients
            .find_client("acme".to_string(), other.uuid)
            .await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_client_unknown_slug_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.clients.get_client("ghost".to_string()).await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_clients_returns_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        for slug in ["first", "second", "third"] {
            ctx.clients
                .upsert_client(ClientUpsert::named(slug, slug))
                .await?;
        }

        let slugs: Vec<String> = ctx
            .clients
            .list_clients()
            .await?
            .into_iter()
            .map(|client| client.slug)
            .collect();

        assert_eq!(slugs, ["third", "second", "first"]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_client_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.clients
            .upsert_client(ClientUpsert::named("acme", "Acme"))
            .await?;

        ctx.clients.delete_client("acme".to_string()).await?;

        let result = ctx.clients.get_client("acme".to_string()).await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_client_unknown_slug_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.clients.delete_client("ghost".to_string()).await;

        assert!(
            matches!(result, Err(ClientsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn database_rejects_out_of_range_scale() -> TestResult {
        let ctx = TestContext::new().await;

        let result = sqlx::query("INSERT INTO clients (slug, name, logo_scale) VALUES ('x', 'X', 10)")
            .execute(ctx.db.pool())
            .await
            .map_err(ClientsServiceError::from);

        assert!(
            matches!(result, Err(ClientsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }
}
