use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(e) = backend::start_server().await {
        error!("server failed: {e}");
        std::process::exit(1);
    }
}
