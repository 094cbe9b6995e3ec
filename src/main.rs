use alfredmoji::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let mut config = cli.load_config()?;
    cli.apply(&mut config);
    let opts = cli.options(&config);
    let source = cli.source(&config);

    let stdout = std::io::stdout();
    let report = alfredmoji::run(&*source, &opts, &mut stdout.lock())?;

    if let Some(archive) = &report.archive {
        println!("{} file created successfully.", archive.display());
    }
    Ok(())
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/alfredmoji-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("alfredmoji debug log started — tail -f /tmp/alfredmoji-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }
    Ok(())
}
