use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    if let Err(e) = patente::cli::run_main().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
