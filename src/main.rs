use lending_ledger::{
    adapters::mock::{
        notification_service::NotificationService as MockNotificationService,
        user_service::UserService as MockUserService,
    },
    api::{handlers::AppState, router::create_router},
    application::ledger::{LendingLedger, ServiceDependencies},
    config::Config,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lending_ledger=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    // Initialize adapters
    let user_service = Arc::new(MockUserService::with_active_users(
        config.active_users.iter().cloned(),
    ));
    let notification_service = Arc::new(MockNotificationService::new());

    // Create service dependencies
    let service_deps = ServiceDependencies {
        user_service,
        notification_service,
    };

    // Create the ledger and seed the inventory
    let mut ledger = LendingLedger::new(service_deps);
    for (book_id, quantity) in &config.initial_inventory {
        ledger.add_book(book_id, *quantity);
    }

    tracing::info!(
        active_users = config.active_users.len(),
        books = config.initial_inventory.len(),
        "Ledger initialized"
    );

    // Create application state
    let app_state = Arc::new(AppState::new(ledger));

    // Create router
    let app = create_router(app_state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
