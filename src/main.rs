#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    sportsmate_api::run().await
}
