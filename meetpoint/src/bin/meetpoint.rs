use clap::Parser;
use meetpoint::app::MidpointApp;

fn main() {
    env_logger::init();
    let args = MidpointApp::parse();
    match args.run() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("failed running meetpoint: {e}");
            std::process::exit(1);
        }
    }
}
