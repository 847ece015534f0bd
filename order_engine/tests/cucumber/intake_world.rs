use cucumber::World;
use log::*;
use order_engine::{
    db_types::{NormalizedAddress, Order},
    test_utils::{
        prepare_env::{prepare_test_env, random_db_path},
        FixedNormalizer,
    },
    OrderIntakeApi,
    OrderIntakeError,
    OrderQueryApi,
    SqliteDatabase,
};

#[derive(Default, Debug, World)]
pub struct IntakeWorld {
    pub system: Option<OrderManagementSystem>,
    pub draft: Option<Order>,
    pub last_result: Option<Result<(), OrderIntakeError>>,
}

#[derive(Debug)]
pub struct OrderManagementSystem {
    pub db_path: String,
    pub db: SqliteDatabase,
    pub normalizer: FixedNormalizer,
}

impl IntakeWorld {
    pub fn system(&self) -> &OrderManagementSystem {
        self.system.as_ref().expect("System not initialised. Start the scenario with 'Given a fresh install'")
    }

    pub fn system_mut(&mut self) -> &mut OrderManagementSystem {
        self.system.as_mut().expect("System not initialised. Start the scenario with 'Given a fresh install'")
    }

    pub fn draft_mut(&mut self) -> &mut Order {
        self.draft.as_mut().expect("No order is being drafted")
    }

    pub fn intake_api(&self) -> OrderIntakeApi<SqliteDatabase, SqliteDatabase, FixedNormalizer> {
        let sys = self.system();
        OrderIntakeApi::new(sys.db.clone(), sys.db.clone(), sys.normalizer.clone())
    }

    pub fn query_api(&self) -> OrderQueryApi<SqliteDatabase> {
        OrderQueryApi::new(self.system().db.clone())
    }
}

impl OrderManagementSystem {
    pub async fn new() -> Self {
        let url = random_db_path();
        prepare_test_env(&url).await;
        let db = SqliteDatabase::new_with_url(&url, 1).await.expect("Error creating connection to database");
        debug!("Created database: {url}");
        let normalizer =
            FixedNormalizer::found(NormalizedAddress::new("8 Boulevard du Port", "80000", "Amiens"));
        Self { db_path: url, db, normalizer }
    }
}
