//! src/routes/clients/post.rs

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::domain::{Client, ClientFormData, NewClient};
use crate::email_client::EmailClient;
use crate::error::{AppResult, Error};
use crate::routes::{send_welcome_email, EmailDeliveryOutcome};

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ClientCreated {
    pub message: String,
    pub client: Client,
    pub email: EmailDeliveryOutcome,
}

#[tracing::instrument(
    name = "Adding a new client",
    skip(body, pool, email_client),
    fields(
        client_email = tracing::field::Empty,
        client_id = tracing::field::Empty
    )
)]
pub async fn add_client(
    body: web::Json<ClientFormData>,
    pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
) -> AppResult<HttpResponse> {
    let new_client: NewClient = body.into_inner().try_into()?;
    tracing::Span::current().record("client_email", tracing::field::display(&new_client.email));

    let client = insert_client(&pool, &new_client).await.map_err(|e| {
        let e = Error::from_store_error(e, "Failed to add client");
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Error inserting client"
        );
        e
    })?;
    tracing::Span::current().record("client_id", tracing::field::display(&client.id));

    // from here on the request succeeds, whatever the provider answers
    let email = send_welcome_email(&email_client, &new_client).await;

    Ok(HttpResponse::Created().json(ClientCreated {
        message: "Client added successfully".to_owned(),
        client,
        email,
    }))
}

#[tracing::instrument(
    name = "Saving new client details in the database",
    skip(new_client, pool)
)]
pub async fn insert_client(pool: &PgPool, new_client: &NewClient) -> Result<Client, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        r#"
        INSERT INTO clients (name, email, business_name)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, business_name, created_at
        "#,
    )
    .bind(&new_client.name)
    .bind(new_client.email.as_ref())
    .bind(&new_client.business_name)
    .fetch_one(pool)
    .await
}
