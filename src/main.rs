use config::Config;
use dotenvy::dotenv;

use unistay::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::builder()
        .add_source(config::File::with_name("config"))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to parse configuration: {e}")))?;

    unistay::run(server_config).await
}
