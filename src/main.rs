use clap::Parser;
use paddock::utils::{logger, validation::Validate};
use paddock::{CliConfig, OpenF1Gateway, PaddockService, SortConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting paddock CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let gateway = OpenF1Gateway::new(config.clone());
    let service = PaddockService::new(gateway, config.clone());

    let teams = service.team_standings().await;
    println!("Teams (session {}):", config.session_key);
    for team in &teams {
        println!(
            "  {:<28} {:>2} drivers  [{}]",
            team.team_name,
            team.drivers.len(),
            team.country_codes.join(", ")
        );
    }

    let roster = service
        .driver_roster(
            config.search.as_deref().unwrap_or(""),
            "",
            "",
            SortConfig::default(),
        )
        .await;
    println!("\nDrivers:");
    for d in &roster {
        println!(
            "  #{:<3} {:<22} {}  {}",
            d.driver_number,
            d.full_name,
            d.country_code.as_deref().unwrap_or("INT"),
            d.team_name.as_deref().unwrap_or("Unknown Team"),
        );
    }

    let sessions = service.recent_sessions().await;
    println!("\nRecent sessions ({}):", config.year);
    for session in &sessions {
        println!(
            "  {}  {:<12} {}",
            session.date_start.format("%Y-%m-%d"),
            session.session_name,
            session.circuit_short_name.as_deref().unwrap_or("-")
        );
    }

    if let Some(number) = config.driver {
        // The lookup path propagates so a transient failure is visible.
        match service.driver_detail(number).await {
            Ok(Some(detail)) => {
                let d = &detail.driver;
                println!(
                    "\n#{} {} ({}) — {}",
                    d.driver_number,
                    d.full_name,
                    d.country_code.as_deref().unwrap_or("INT"),
                    d.team_name.as_deref().unwrap_or("Unknown Team"),
                );
                for lap in &detail.laps {
                    match lap.lap_duration {
                        Some(duration) => println!("  lap {:>2}  {:.3}s", lap.lap_number, duration),
                        None => println!("  lap {:>2}  --", lap.lap_number),
                    }
                }
                let prev = detail
                    .navigation
                    .previous
                    .map(|p| format!("#{}", p.driver_number))
                    .unwrap_or_else(|| "-".to_string());
                let next = detail
                    .navigation
                    .next
                    .map(|n| format!("#{}", n.driver_number))
                    .unwrap_or_else(|| "-".to_string());
                println!("  prev: {}  next: {}", prev, next);
            }
            Ok(None) => println!("\nNo driver #{} in session {}", number, config.session_key),
            Err(e) => {
                tracing::error!("Driver lookup failed: {}", e);
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
