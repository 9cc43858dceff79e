use helloworld_extension::configuration::get_configuration;
use helloworld_extension::startup::Application;
use helloworld_extension::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up tracing first, so configuration and start-up problems get logged too
    let subscriber = get_subscriber(
        "helloworld-extension".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
