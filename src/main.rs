#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    rsvp::start_server().await;
}
