#[tokio::main]
async fn main() {
    park_rental_backend::run().await;
}
