#[actix_web::main]
async fn main() {
    if let Err(err) = intentemoslo_lib::run().await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
