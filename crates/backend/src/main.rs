use beneficiary_reports::routes::{configure_routes, AppState};
use beneficiary_reports::shared::{config, logging};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_beneficiary_reports::BeneficiaryReports;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = config::load_config()?;
    logging::init_tracing(&config.logging)?;
    tracing::info!("Configuration loaded from {}", source);

    let addr = config.bind_addr()?;
    tracing::info!(
        "Enabled use case: {} \"{}\": {}",
        BeneficiaryReports::full_name(),
        BeneficiaryReports::display_name(),
        BeneficiaryReports::description()
    );
    tracing::info!(
        "Title centering: {:?}, upload limit: {} MB",
        config.report.title_centering,
        config.upload.max_file_size_mb
    );

    let app = configure_routes(AppState::new(config));

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
