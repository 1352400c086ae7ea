use clap::Parser;
use kestrelc_drv::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = kestrelc_drv::run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
