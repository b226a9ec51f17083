//! Terminal entry point.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use storefront_observability::LogFormat;

    storefront_observability::tracing::init(LogFormat::Compact);

    let args = storefront_web::cli::Args::parse();
    let mut stdout = std::io::stdout().lock();
    storefront_web::cli::run(args, &mut stdout).await
}

// The browser build mounts from `frontend::main` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
