use std::sync::Arc;

use chrono::Utc;

use tutorhub_auth::SessionStore;
use tutorhub_catalog::{DemoData, billing, lesson};
use tutorhub_client::{
    ClientShell, DemoDirectory, InMemoryCredentialService, InMemoryProfileStore,
    InMemoryTokenVault,
};

/// Demo walk-through: restore, hit a guarded route while signed out, sign in,
/// browse, sign out. Decisions and notices go to the structured log.
#[tokio::main]
async fn main() {
    tutorhub_observability::init();

    let data = DemoData::seed(Utc::now());
    let directory = Arc::new(DemoDirectory::with_standard_accounts(&data));

    let store = SessionStore::new(
        Arc::new(InMemoryCredentialService::new(Arc::clone(&directory))),
        Arc::new(InMemoryProfileStore::new(directory)),
        Arc::new(InMemoryTokenVault::default()),
    );

    let mut shell = ClientShell::new(store);
    shell.start().await;

    // Signed out: a guarded route bounces to sign-in and records the return path.
    let decision = shell.open("/student-dashboard/homework");
    tracing::info!(?decision, location = %shell.location(), "guarded route while signed out");

    let ok = shell.sign_in("student@example.com", "password123").await;
    tracing::info!(ok, location = %shell.location(), "signed in; landed on the originally requested page");

    for notice in shell.take_notices() {
        tracing::info!(level = ?notice.level, message = %notice.message, "notice");
    }

    // The learner's dashboard data.
    let upcoming = lesson::for_student(&data.lessons, data.learner_id)
        .into_iter()
        .filter(|l| l.is_upcoming(Utc::now()))
        .count();
    let due = billing::outstanding_total(&data.payments, data.learner_id);
    tracing::info!(upcoming_lessons = upcoming, outstanding_cents = due, "dashboard summary");

    // A learner cannot open the admin dashboard: redirected to their own home.
    let decision = shell.open("/admin-dashboard");
    tracing::info!(?decision, location = %shell.location(), "admin route as learner");

    shell.sign_out();
    tracing::info!(location = %shell.location(), "signed out");
}
