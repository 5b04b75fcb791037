//! Clients Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    domain::clients::{
        data::ClientUpsert,
        records::{ClientRecord, ClientUuid},
    },
    translations::Language,
};

const LIST_CLIENTS_SQL: &str = include_str!("sql/list_clients.sql");
const GET_CLIENT_SQL: &str = include_str!("sql/get_client.sql");
const FIND_CLIENT_SQL: &str = include_str!("sql/find_client.sql");
const UPSERT_CLIENT_SQL: &str = include_str!("sql/upsert_client.sql");
const DELETE_CLIENT_SQL: &str = include_str!("sql/delete_client.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgClientsRepository;

impl PgClientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_clients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(LIST_CLIENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(GET_CLIENT_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
        client: ClientUuid,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(FIND_CLIENT_SQL)
            .bind(slug)
            .bind(client.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn upsert_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: &ClientUpsert,
    ) -> Result<ClientRecord, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(UPSERT_CLIENT_SQL)
            .bind(&client.slug)
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.logo)
            .bind(client.logo_scale)
            .bind(client.invert_logo)
            .bind(client.language.code())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CLIENT_SQL)
            .bind(slug)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ClientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let language: String = row.try_get("language")?;

        Ok(Self {
            uuid: ClientUuid::from_uuid(row.try_get("id")?),
            slug: row.try_get("slug")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            logo: row.try_get("logo")?,
            logo_scale: row.try_get("logo_scale")?,
            invert_logo: row.try_get("invert_logo")?,
            language: Language::from_code(&language),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
