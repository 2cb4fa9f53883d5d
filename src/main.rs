use clap::Parser;
use log::warn;
use vertex_stage::app;
use vertex_stage::io::config::Config;

/// Feeds a demo scene through the Phong vertex transform stage.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a TOML scene config; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Print the wire contract (binding names) and the GLSL vertex shader
    /// source for the dialect this build targets, then exit.
    #[arg(long)]
    list_bindings: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.list_bindings {
        app::print_bindings();
        return;
    }

    let config = match args.config {
        Some(path) => match Config::load(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("{e}; using default config");
                Config::default()
            }
        },
        None => Config::default(),
    };

    app::run(config);
}
