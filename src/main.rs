use anyhow::Context;
use clap::Parser;
use webproj::utils::logger;
use webproj::{Cli, ClientConfig, Command, Coord, EpsgIo, ReprojectionBackend, Twcc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let mut config = ClientConfig::from_env();
    if let Some(key) = cli.api_key.clone() {
        config.api_key = Some(key);
    }

    match cli.command {
        Command::Ping => {
            if EpsgIo::new(config).ping().await {
                println!("service reachable");
            } else {
                eprintln!("service unreachable");
                std::process::exit(1);
            }
        }
        Command::Point { src, dst, x, y, twcc } => {
            let point = if twcc {
                Twcc::new(config).reproject_point(src, dst, x, y).await?
            } else {
                EpsgIo::new(config).reproject_point(src, dst, x, y).await?
            };
            println!("{} {}", point.x, point.y);
        }
        Command::Batch { src, dst } => {
            let mut points = Vec::new();
            for line in std::io::stdin().lines() {
                let line = line.context("reading stdin")?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let (x, y) = line
                    .split_once(',')
                    .with_context(|| format!("expected \"x,y\", got {line:?}"))?;
                points.push(Coord::new(
                    x.trim().parse().with_context(|| format!("bad x in {line:?}"))?,
                    y.trim().parse().with_context(|| format!("bad y in {line:?}"))?,
                ));
            }
            let reprojected = EpsgIo::new(config).reproject_points(src, dst, &points).await?;
            for point in reprojected {
                println!("{},{}", point.x, point.y);
            }
        }
        Command::Search { query } => {
            for result in EpsgIo::new(config).search(&query).await {
                println!("{}\t{}", result.code, result.name);
            }
        }
        Command::Wkt { code } => {
            println!("{}", EpsgIo::new(config).lookup_wkt(code).await?);
        }
    }

    Ok(())
}
