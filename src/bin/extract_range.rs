use clap::Parser;
use guidex::{ExtractArgs, extract_range};
use log::{error, info};
use simple_logger::init_with_level;

fn main() {
    let args = ExtractArgs::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting extract-range with args: {}", args);

    if let Err(e) = extract_range(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
