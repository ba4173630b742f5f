#[tokio::main]
async fn main() {
    dishes::start_server().await;
}
