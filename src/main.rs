use busfare::config::Config;
use busfare::engine::Engine;
use busfare::error::Error;
use busfare::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::new(&config)?;

    serve(engine, config.bind_addr).await
}
