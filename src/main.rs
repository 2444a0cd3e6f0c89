//! Spaceship Duel entry point

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Spaceship Duel starting...");

    if let Err(e) = spaceship_duel::app::run() {
        log::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}
