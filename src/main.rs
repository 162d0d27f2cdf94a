use env_logger::Env;
use tally::{
    configuration::get_configuration,
    services::{poller_handler, CatalogClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let catalog_client = CatalogClient::new(configuration.catalog)?;

    tokio::select! {
        result = poller_handler(catalog_client) => result,
        _ = tokio::signal::ctrl_c() => {
            log::info!("Received ctrl-c, stopping poller");
            Ok(())
        }
    }
}
