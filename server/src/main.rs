use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::TextbookRouter;
use driver::config::{self, LedgerBackend};
use driver::database::{InMemoryLedger, RedisLedger};
use error_stack::ResultExt;
use kernel::interface::database::{DatabaseConnection, WorldState};
use kernel::KernelError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod controller;
mod error;
mod handler;
mod identity;
mod request;
mod response;
mod route;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "application=debug,driver=debug,server=debug,tower_http=debug".into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let roles = config::role_registry()?;
    let port = config::server_port()?;
    tracing::info!(
        manufacturer = %roles.manufacturer(),
        dealer = %roles.dealer(),
        "role registry loaded"
    );

    match config::ledger_backend()? {
        LedgerBackend::InMemory => {
            tracing::info!("using in-memory world state");
            serve(AppModule::new(InMemoryLedger::default(), roles), port).await?
        }
        LedgerBackend::Redis => {
            tracing::info!("using redis world state");
            serve(AppModule::new(RedisLedger::new()?, roles), port).await?
        }
    }

    Ok(())
}

async fn serve<C>(app: AppModule<C>, port: u16) -> error_stack::Result<(), KernelError>
where
    C: DatabaseConnection,
    C::Transaction: WorldState,
{
    let router = axum::Router::<AppModule<C>>::new()
        .route_textbook()
        .layer(TraceLayer::new_for_http())
        .with_state(app);

    let bind = SocketAddr::from(([0, 0, 0, 0], port));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("listening on {bind}");

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
