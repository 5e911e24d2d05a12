use checkup_portal::api;
use checkup_portal::logger::*;
use checkup_portal::server::*;
use checkup_portal::settings::*;
use std::fs;
use std::sync::Arc;
use tokio::signal;
use warp::Filter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let address: std::net::SocketAddr = project_settings.http.address.parse()?;
    let server = Arc::new(Server::try_new(&project_settings)?);

    let routes = api::v1::scoped(server.clone())
        .or(api::pages(server.clone()))
        .recover(api::v1::recover_error);

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("could not register SIGINT: {}", e);
        }
    };

    server
        .console
        .info(format_args!("portal listening on {address}"));

    match &project_settings.http.tls {
        Some(tls) => {
            if !fs::metadata(&tls.cert_path)?.is_file() {
                return Err(anyhow::anyhow!(
                    "TLS cert is not a regular file: {:?}",
                    tls.cert_path
                ));
            }
            if !fs::metadata(&tls.key_path)?.is_file() {
                return Err(anyhow::anyhow!(
                    "TLS key is not a regular file: {:?}",
                    tls.key_path
                ));
            }
            warp::serve(routes)
                .tls()
                .cert_path(&tls.cert_path)
                .key_path(&tls.key_path)
                .bind_with_graceful_shutdown(address, shutdown)
                .1
                .await;
        }
        None => {
            warp::serve(routes)
                .bind_with_graceful_shutdown(address, shutdown)
                .1
                .await;
        }
    }

    server.shutdown();
    tracing::info!("server shutdown successfully");

    Ok(())
}
