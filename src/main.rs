#[tokio::main]
async fn main() {
    let code = sqllint::app::startup::run(std::env::args_os()).await;
    std::process::exit(code);
}
