//! src/routes/clients/get.rs

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::domain::Client;
use crate::error::{AppResult, Error};

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ClientsList {
    pub clients: Vec<Client>,
}

#[tracing::instrument(name = "Listing all clients", skip(pool))]
pub async fn list_clients(pool: web::Data<PgPool>) -> AppResult<HttpResponse> {
    let clients = get_all_clients(&pool).await.map_err(|e| {
        let e = Error::from_store_error(e, "Failed to fetch clients");
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Error fetching clients"
        );
        e
    })?;
    Ok(HttpResponse::Ok().json(ClientsList { clients }))
}

#[tracing::instrument(name = "Reading all clients from the database", skip_all)]
pub async fn get_all_clients(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        r#"
        SELECT id, name, email, business_name, created_at
        FROM clients
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
