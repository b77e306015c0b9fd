use clap::Parser;
use guidex::{GuideArgs, scan_guides};
use log::{error, info};
use simple_logger::init_with_level;

fn main() {
    let args = GuideArgs::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting find-guides with args: {}", args);

    if let Err(e) = scan_guides(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
