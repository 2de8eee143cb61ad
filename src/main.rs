use anyhow::Context;
use foody_checks::client::FoodApiClient;
use foody_checks::configuration::get_configuration;
use foody_checks::scenario;
use foody_checks::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("foody-checks".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let food_api = configuration.food_api;
    let client = FoodApiClient::authenticate(
        food_api.base_url.clone(),
        &food_api.credentials(),
        food_api.timeout(),
    )
    .await
    .context("Failed to bootstrap an authenticated Foody client.")?;

    let report = scenario::run(&client).await;
    println!("{report}");
    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}
