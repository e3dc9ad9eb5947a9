mod app;
mod components;
mod contact;
mod content;
mod logging;
mod markdown;
mod sections;
mod sitemap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;
    app::run().await
}
