#[cfg(test)]
pub mod test_db {
    use crate::auth::{PasswordHasher, Role};
    use crate::db::{create_course, create_room, create_software, create_user};
    use crate::env::MIN_BCRYPT_COST;
    use crate::models::{NewCourse, NewRoom, NewSoftware};
    use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};
    use std::collections::HashMap;
    use std::sync::Once;

    static INIT: Once = Once::new();
    pub static STANDARD_PASSWORD: &str = "password123";

    /// A single connection that never expires, so the in-memory database
    /// lives as long as the pool.
    pub async fn memory_pool() -> Pool<Sqlite> {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
                .with_test_writer()
                .try_init();
        });

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    pub struct TestUser {
        pub email: String,
        pub full_name: String,
        pub role: Role,
    }

    #[derive(Default)]
    pub struct TestDbBuilder {
        users: Vec<TestUser>,
        courses: Vec<String>,
        rooms: Vec<String>,
        software: Vec<String>,
    }

    impl TestDbBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn user(mut self, email: &str, full_name: &str, role: Role) -> Self {
            self.users.push(TestUser {
                email: email.to_string(),
                full_name: full_name.to_string(),
                role,
            });
            self
        }

        pub fn admin(self, email: &str, full_name: &str) -> Self {
            self.user(email, full_name, Role::Admin)
        }

        pub fn professor(self, email: &str, full_name: &str) -> Self {
            self.user(email, full_name, Role::Professor)
        }

        pub fn coordinator(self, email: &str, full_name: &str) -> Self {
            self.user(email, full_name, Role::Coordinator)
        }

        pub fn course(mut self, name: &str) -> Self {
            self.courses.push(name.to_string());
            self
        }

        pub fn room(mut self, name: &str) -> Self {
            self.rooms.push(name.to_string());
            self
        }

        pub fn software(mut self, name: &str) -> Self {
            self.software.push(name.to_string());
            self
        }

        pub async fn build(self) -> TestDb {
            let pool = memory_pool().await;
            let hasher = PasswordHasher::new(MIN_BCRYPT_COST);
            let password_hash = hasher
                .hash(STANDARD_PASSWORD)
                .expect("Failed to hash password");

            let mut db = TestDb {
                pool,
                user_ids: HashMap::new(),
                course_ids: HashMap::new(),
                room_ids: HashMap::new(),
                software_ids: HashMap::new(),
            };

            for user in &self.users {
                let id = create_user(
                    &db.pool,
                    &user.full_name,
                    &user.email,
                    &password_hash,
                    user.role,
                )
                .await
                .expect("Failed to create test user");
                db.user_ids.insert(user.email.clone(), id);
            }

            for name in &self.courses {
                let course = NewCourse {
                    name: Some(name.clone()),
                    workload: Some(2400),
                    area: Some("Tecnologia".to_string()),
                    description: Some(format!("Curso de {}", name)),
                };
                let id = create_course(&db.pool, &course)
                    .await
                    .expect("Failed to create test course");
                db.course_ids.insert(name.clone(), id);
            }

            for name in &self.rooms {
                let room = NewRoom {
                    name: Some(name.clone()),
                    kind: Some("Laboratório".to_string()),
                    resources: Some("30 computadores".to_string()),
                };
                let id = create_room(&db.pool, &room)
                    .await
                    .expect("Failed to create test room");
                db.room_ids.insert(name.clone(), id);
            }

            for name in &self.software {
                let software = NewSoftware {
                    name: Some(name.clone()),
                    note: None,
                };
                let id = create_software(&db.pool, &software)
                    .await
                    .expect("Failed to create test software");
                db.software_ids.insert(name.clone(), id);
            }

            db
        }
    }

    pub struct TestDb {
        pub pool: Pool<Sqlite>,
        pub user_ids: HashMap<String, i64>,
        pub course_ids: HashMap<String, i64>,
        pub room_ids: HashMap<String, i64>,
        pub software_ids: HashMap<String, i64>,
    }

    impl TestDb {
        pub fn user_id(&self, email: &str) -> i64 {
            self.user_ids[email]
        }

        pub fn course_id(&self, name: &str) -> i64 {
            self.course_ids[name]
        }

        pub fn room_id(&self, name: &str) -> i64 {
            self.room_ids[name]
        }

        pub fn software_id(&self, name: &str) -> i64 {
            self.software_ids[name]
        }

        pub async fn count(&self, table: &str) -> i64 {
            sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&self.pool)
                .await
                .expect("Failed to count rows")
        }
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::test_db::{STANDARD_PASSWORD, TestDb, TestDbBuilder};
    use crate::client::{ClientError, Method, RawResponse, Transport};
    use crate::env::{AppConfig, MIN_BCRYPT_COST};
    use crate::init_rocket;
    use crate::models::LoginResponse;
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::asynchronous::Client;
    use serde_json::{Value, json};

    pub const ADMIN: &str = "admin@escola.edu";
    pub const PROFESSOR: &str = "ana@escola.edu";
    pub const COORDINATOR: &str = "carlos@escola.edu";

    pub fn test_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            port: 3000,
            token_secret: "test-secret".to_string(),
            token_ttl_secs: 3600,
            bcrypt_cost: MIN_BCRYPT_COST,
        }
    }

    /// One user of each role, two courses, a room and two software titles.
    pub async fn create_standard_test_db() -> TestDb {
        TestDbBuilder::new()
            .admin(ADMIN, "Administradora")
            .professor(PROFESSOR, "Ana Souza")
            .coordinator(COORDINATOR, "Carlos Lima")
            .course("Informática")
            .course("Administração")
            .room("Lab 1")
            .software("VS Code")
            .software("PostgreSQL")
            .build()
            .await
    }

    pub async fn setup_test_client(test_db: TestDb) -> (Client, TestDb) {
        let rocket = init_rocket(test_db.pool.clone(), &test_config(), None);
        let client = Client::tracked(rocket)
            .await
            .expect("valid rocket instance");

        (client, test_db)
    }

    pub async fn login_test_user(client: &Client, email: &str) -> String {
        let response = client
            .post("/login")
            .header(ContentType::JSON)
            .body(json!({ "email": email, "senha": STANDARD_PASSWORD }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok, "login failed for {}", email);
        let body: LoginResponse = response.into_json().await.expect("login body");
        body.token
    }

    pub fn bearer(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {}", token))
    }

    /// Sends a request as `token` and returns the status with the JSON body.
    pub async fn call(
        client: &Client,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (Status, Value) {
        let path = path.to_string();
        let mut request = match method {
            Method::Get => client.get(path),
            Method::Post => client.post(path),
            Method::Put => client.put(path),
            Method::Delete => client.delete(path),
        };

        if let Some(token) = token {
            request = request.header(bearer(token));
        }
        if let Some(body) = body {
            request = request.header(ContentType::JSON).body(body.to_string());
        }

        let response = request.dispatch().await;
        let status = response.status();
        let body = response
            .into_string()
            .await
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or(Value::Null);

        (status, body)
    }

    /// Routes the API client straight into the local Rocket instance.
    pub struct LocalTransport {
        pub client: Client,
    }

    #[rocket::async_trait]
    impl Transport for LocalTransport {
        async fn send(
            &self,
            method: Method,
            path: &str,
            token: Option<&str>,
            body: Option<String>,
        ) -> Result<RawResponse, ClientError> {
            let path = path.to_string();
            let mut request = match method {
                Method::Get => self.client.get(path),
                Method::Post => self.client.post(path),
                Method::Put => self.client.put(path),
                Method::Delete => self.client.delete(path),
            };

            if let Some(token) = token {
                request = request.header(bearer(token));
            }
            if let Some(body) = body {
                request = request.header(ContentType::JSON).body(body);
            }

            let response = request.dispatch().await;
            let status = response.status().code;
            let body = response.into_string().await.unwrap_or_default();

            Ok(RawResponse { status, body })
        }
    }
}
