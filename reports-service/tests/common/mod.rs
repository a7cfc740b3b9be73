use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Datelike;
use chrono::NaiveDate;
use reports_service::domain::auth::service::AuthService;
use reports_service::domain::reports::errors::ReportsError;
use reports_service::domain::reports::models::Expense;
use reports_service::domain::reports::models::Income;
use reports_service::domain::reports::models::Report;
use reports_service::domain::reports::models::ReportPeriod;
use reports_service::domain::reports::ports::ReportsStore;
use reports_service::domain::user::errors::UserStoreError;
use reports_service::domain::user::models::EmailAddress;
use reports_service::domain::user::models::User;
use reports_service::domain::user::models::UserId;
use reports_service::domain::user::ports::UserStore;
use reports_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_EMAIL: &str = "jane@example.com";
pub const TEST_PASSWORD: &str = "correct-horse-battery";
pub const TEST_USER_ID: i64 = 1;
pub const TEST_FULL_NAME: &str = "Jane Doe";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

/// Credential store backed by a fixed user list
pub struct InMemoryUserStore {
    users: Vec<User>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.iter().find(|u| &u.email == email).cloned())
    }
}

/// Reports store backed by fixed income/expense entries
pub struct InMemoryReportsStore {
    incomes: Vec<Income>,
    expenses: Vec<Expense>,
}

#[async_trait]
impl ReportsStore for InMemoryReportsStore {
    async fn report_for(
        &self,
        user_id: UserId,
        period: &ReportPeriod,
    ) -> Result<Report, ReportsError> {
        let matches = |date: NaiveDate| {
            period.year.map_or(true, |y| date.year() == y.as_i32())
                && period.month.map_or(true, |m| date.month() == m.as_u32())
        };

        // Entries are all seeded for the test user
        let _ = user_id;

        Ok(Report {
            incomes: self
                .incomes
                .iter()
                .filter(|i| matches(i.occurred_on))
                .cloned()
                .collect(),
            expenses: self
                .expenses
                .iter()
                .filter(|e| matches(e.occurred_on))
                .cloned()
                .collect(),
        })
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Valid date")
}

fn seeded_reports() -> InMemoryReportsStore {
    InMemoryReportsStore {
        incomes: vec![
            Income {
                id: 1,
                description: "Paycheck".to_string(),
                amount: 2500.0,
                occurred_on: date(2019, 4, 1),
            },
            Income {
                id: 2,
                description: "Paycheck".to_string(),
                amount: 2500.0,
                occurred_on: date(2019, 5, 1),
            },
            Income {
                id: 3,
                description: "Tax refund".to_string(),
                amount: 420.5,
                occurred_on: date(2020, 1, 15),
            },
        ],
        expenses: vec![
            Expense {
                id: 1,
                description: "Rent".to_string(),
                amount: 1200.0,
                occurred_on: date(2019, 4, 3),
            },
            Expense {
                id: 2,
                description: "Groceries".to_string(),
                amount: 86.3,
                occurred_on: date(2019, 4, 12),
            },
            Expense {
                id: 3,
                description: "Rent".to_string(),
                amount: 1200.0,
                occurred_on: date(2020, 1, 3),
            },
        ],
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let authenticator =
            Arc::new(Authenticator::new(TEST_SECRET).expect("Secret is long enough"));

        let password_hash = authenticator
            .hash_password(TEST_PASSWORD)
            .expect("Failed to hash password");

        let user_store = Arc::new(InMemoryUserStore {
            users: vec![User {
                id: UserId(TEST_USER_ID),
                full_name: TEST_FULL_NAME.to_string(),
                email: EmailAddress::new(TEST_EMAIL.to_string()).expect("Valid email"),
                password_hash,
            }],
        });

        let reports_store = Arc::new(seeded_reports());

        let auth_service = Arc::new(AuthService::new(
            user_store,
            Arc::clone(&authenticator),
            3,
        ));

        let router = create_router(auth_service, reports_store, Arc::clone(&authenticator));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Log the seeded user in and return the issued token
    pub async fn login(&self) -> String {
        let response = self
            .post("/api/login")
            .json(&serde_json::json!({
                "email_address": TEST_EMAIL,
                "password": TEST_PASSWORD
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Token is not a string")
            .to_string()
    }

    /// Issue a token whose expiry is already in the past
    pub fn expired_token(&self) -> String {
        let claims = Claims {
            user_id: TEST_USER_ID,
            full_name: TEST_FULL_NAME.to_string(),
            iat: 1_000_000,
            exp: 1_003_600,
        };
        self.authenticator
            .issue_token(&claims)
            .expect("Failed to issue token")
    }

    /// Issue a valid-looking token signed with a different secret
    pub fn foreign_token(&self) -> String {
        let other = Authenticator::new(b"some-other-signing-secret-with-32-bytes!!")
            .expect("Secret is long enough");
        let claims = Claims::for_identity(TEST_USER_ID, TEST_FULL_NAME, 3);
        other.issue_token(&claims).expect("Failed to issue token")
    }
}
