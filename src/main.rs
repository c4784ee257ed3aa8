use taxi_service::{config, server, telemetry};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;

    telemetry::init(&config.observability);

    server::run(config).await
}
