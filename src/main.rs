use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use unit_lottery::config::{CliConfig, Command};
use unit_lottery::core::report;
use unit_lottery::utils::monitor::SystemMonitor;
use unit_lottery::utils::{logger, validation::Validate};
use unit_lottery::{
    duplicate_keys, latest_entries, EntryStore, LotteryEngine, Result, SheetStore, Submission,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting unit-lottery CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("❌ Operation failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    let file_config = config.load_file_config()?;
    let settings = config.resolve_settings(file_config.as_ref())?;

    let mut monitor = SystemMonitor::new(settings.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let store = SheetStore::new(settings.endpoint.clone(), settings.timeout)?;

    match &config.command {
        Command::Submit {
            address,
            floor,
            first,
            second,
        } => {
            let submission = Submission {
                address: address.clone(),
                floor: floor.clone(),
                first_choice: first.clone(),
                second_choice: second.clone(),
            };
            submission.validate()?;

            store.submit(&submission).await?;
            monitor.log_stats("submit");

            tracing::info!("✅ Submission accepted");
            println!("提交成功!");
        }

        Command::Duplicates => {
            let history = store.fetch_entries().await?;
            monitor.log_stats("fetch");
            tracing::info!("Fetched {} entries", history.len());

            let duplicates = duplicate_keys(&history);
            println!("{}", report::render_duplicates(&duplicates));
        }

        Command::Draw { seed, output, .. } => {
            let quotas = config.resolve_quotas(file_config.as_ref())?;

            let history = store.fetch_entries().await?;
            monitor.log_stats("fetch");
            tracing::info!("Fetched {} entries", history.len());

            let entries = latest_entries(&history);
            tracing::info!("{} unique applicants after deduplication", entries.len());

            let engine = LotteryEngine::new(quotas);
            let result = match seed {
                Some(seed) => {
                    tracing::info!("Drawing with fixed seed {}", seed);
                    let mut rng = StdRng::seed_from_u64(*seed);
                    engine.draw(&entries, &mut rng)
                }
                None => {
                    let mut rng = rand::thread_rng();
                    engine.draw(&entries, &mut rng)
                }
            };
            monitor.log_stats("draw");

            println!("{}", report::render_text(&result));

            if let Some(path) = output {
                let file = std::fs::File::create(path)?;
                report::write_csv(&result, file)?;
                tracing::info!("📁 Results saved to: {}", path);
                println!("📁 結果已輸出至 {}", path);
            }
        }
    }

    monitor.log_final_stats();
    Ok(())
}
