//! Passport Hub server binary.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    passport_hub::server::run().await
}
