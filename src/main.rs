use log::info;
use overmind::{build_handlers, persona, server, Error, ProxyConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Error>
{   // A missing .env is fine, the environment may already be set
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let proxy_config = ProxyConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;
    info!("Upstream: {}", proxy_config.api_base);

    let handlers = build_handlers(&proxy_config, persona::all())?;
    server::serve(&server_config, handlers).await
}
