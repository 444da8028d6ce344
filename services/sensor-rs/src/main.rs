use dotenvy::dotenv;
use road_sensor_sim::{Config, Driver, Error, HttpTransport, Sender, SystemClock};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let transport = HttpTransport::new(config.timeout())?;
    let sender = Sender::new(transport, SystemClock, config.endpoint());

    info!(
        endpoint = %sender.endpoint(),
        interval_ms = config.interval_ms,
        timeout_ms = config.timeout_ms,
        iterations = ?config.iterations,
        "sensor simulator up"
    );

    Driver::new(sender, config.interval(), config.iterations).run().await;
    Ok(())
}
