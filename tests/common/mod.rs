#![allow(dead_code)]

use book_reviews::configuration::{get_configuration, DatabaseSettings};
use book_reviews::telemetry::{get_subscriber, init_subscriber};
use serde_json::{json, Value};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::sync::Once;

static TRACING: Once = Once::new();

// logs are dropped unless TEST_LOG is set
fn init_tracing() {
    TRACING.call_once(|| {
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = get_subscriber("test".into(), "debug".into(), std::io::stdout);
            init_subscriber(subscriber).expect("Failed to init tracing");
        } else {
            let subscriber = get_subscriber("test".into(), "debug".into(), std::io::sink);
            init_subscriber(subscriber).expect("Failed to init tracing");
        }
    });
}

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub client: reqwest::Client,
}

/// Starts the server on a random port against a fresh database.
/// Returns `None` when postgres is not reachable so the calling test can bail out.
pub async fn spawn_app() -> Option<TestApp> {
    spawn_app_with_cost(1).await
}

pub async fn spawn_app_with_cost(cost: u32) -> Option<TestApp> {
    init_tracing();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();
    configuration.password.cost = cost;

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = book_reviews::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        client: reqwest::Client::new(),
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

pub fn review_body(star: i64, password: &str) -> Value {
    json!({
        "title": "T",
        "book_name": "B",
        "content": "C",
        "user_name": "u",
        "star": star,
        "password": password,
    })
}

impl TestApp {
    pub async fn post_review(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(&format!("{}/reviews", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a review and returns its id.
    pub async fn create_review(&self, password: &str) -> i64 {
        let response = self.post_review(&review_body(5, password)).await;
        assert_eq!(201, response.status().as_u16());

        let body: Value = response.json().await.unwrap();
        body["data"]["id"].as_i64().expect("review id")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(&format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(&format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .delete(&format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a comment under `review_id` and returns its id.
    pub async fn create_comment(&self, review_id: i64, content: &str, password: &str) -> i64 {
        let response = self
            .post(
                &format!("/reviews/{}/comments", review_id),
                &json!({ "content": content, "user_name": "c", "password": password }),
            )
            .await;
        assert_eq!(201, response.status().as_u16());

        let body: Value = response.json().await.unwrap();
        body["data"]["id"].as_i64().expect("comment id")
    }
}

/// Asserts that no `password` key appears anywhere in a response body.
pub fn assert_no_password(value: &Value) {
    match value {
        Value::Object(map) => {
            assert!(!map.contains_key("password"), "password leaked: {}", value);
            map.values().for_each(assert_no_password);
        }
        Value::Array(items) => items.iter().for_each(assert_no_password),
        _ => {}
    }
}
