use std::process;

use sdkversions_cli::{error_message, error_title};
use sdkversions_utils::log_error;

#[tokio::main]
async fn main() {
    if let Err(e) =
        sdkversions_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
    {
        log_error(error_title(&e), &error_message(&e));
        process::exit(1);
    }
}
