mod domain;
mod infrastructure;
mod interfaces;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, sanitize, use_cases, validate};
pub use infrastructure::{auth, db, limiter, mailer, utils};
pub use interfaces::{handlers, middlewares, repositories};

use limiter::rate_limiter::FixedWindowLimiter;
use mailer::HttpMailer;
use repositories::sqlx_repo::SqlxRepo;
use use_cases::auth::AdminAuthHandler;
use use_cases::contact::ContactIntake;

pub type AppContactHandler = ContactIntake<SqlxRepo, HttpMailer>;

pub struct AppState {
    pub contact_handler: AppContactHandler,
    pub store: SqlxRepo,
    pub auth_handler: AdminAuthHandler,
    pub limiter: FixedWindowLimiter,
    pub trust_x_forwarded_for: bool,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let store = SqlxRepo::new(pool);
        let mailer = HttpMailer::new(config);
        let contact_handler = ContactIntake::new(store.clone(), mailer);
        let auth_handler = AdminAuthHandler::new(config);

        AppState {
            contact_handler,
            store,
            auth_handler,
            limiter: FixedWindowLimiter::contact_form(),
            trust_x_forwarded_for: config.trust_x_forwarded_for,
        }
    }
}
