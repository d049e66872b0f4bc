use clap::Parser;
use dropsearch::{cmd, Args, Config, Logger, USAGE};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    Logger::init(args.verbose);

    run_app(args).await?;

    Ok(())
}

async fn run_app(args: Args) -> Result<(), anyhow::Error> {
    if args.index {
        let config = Config::init()?;
        cmd::index(&config).await?;
    } else {
        let query = args.query();

        if !query.is_empty() {
            let config = Config::init()?;
            cmd::search(&query, &config).await?;
        } else {
            println!("{USAGE}");
        }
    }

    Ok(())
}
