#[tokio::main]
async fn main() {
    rsvp_hub::run().await;
}
