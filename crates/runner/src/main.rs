use meas_runner::{App, AppConfig, Cli, Command, HELP, print_help};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("meas=info"))
        .init();

    let cli = match Cli::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            std::process::exit(1);
        }
    };

    if cli.command == Command::Help {
        print!("{}", HELP);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    }
    .with_env_overrides()?;

    if let Some(language) = cli.language {
        config.language = Some(language);
    }
    if cli.mock {
        config.mock_price = true;
    }

    let mut app = App::build(config)?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    if let Err(e) = app.run(cli.command, stdin, &mut stdout).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}
