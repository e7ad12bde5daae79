use anyhow::Context;
use greeter::configuration::get_configuration;
use greeter::startup::Application;
use greeter::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("greeter".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let application = Application::build(configuration)
        .await
        .context("Failed to build application.")?;
    application.run_until_stopped().await?;
    Ok(())
}
