//! Command-line entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Sketchboard");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("sketchboard: {e}");
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run() -> sketchboard_app::AppResult<()> {
    use clap::Parser;
    use sketchboard_app::{App, AppConfig, CliArgs, ShortcutRegistry, load_script};

    let args = CliArgs::parse();
    if args.shortcuts {
        ShortcutRegistry::print_all();
    }
    let Some(script) = args.script else {
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let events = load_script(&script)?;

    let mut app = App::new(config);
    app.replay(&events)?;
    let svg = app.render()?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, svg)?;
            log::info!("Wrote {:?}", path);
        }
        None => println!("{svg}"),
    }
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
