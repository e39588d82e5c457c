use chord_remote::utils::{logger, validation::Validate};
use chord_remote::{CliConfig, HttpDispatcher, Player, RemoteError};
use clap::Parser;

fn fail(e: &RemoteError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔在日誌初始化之前讀取，因為它可能開啟 verbose
    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => fail(&e),
    };

    let verbose = cli.verbose || file.as_ref().is_some_and(|f| f.verbose());
    let json = cli.json_logs || file.as_ref().is_some_and(|f| f.json_logs());
    logger::init_logger(verbose, json);

    tracing::debug!("CLI config: {:?}", cli);

    let settings = cli.resolve(file.as_ref());
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }
    tracing::debug!("Remote settings: {:?}", settings);

    let dispatcher = match HttpDispatcher::from_config(&settings) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            tracing::error!("❌ Could not build HTTP client: {}", e);
            fail(&e);
        }
    };
    let player = Player::new(dispatcher, settings);

    let handles: Vec<_> = cli
        .requests()
        .into_iter()
        .map(|request| player.play(request))
        .collect();

    // 行程結束前等待所有請求送出；個別結果已在任務內記錄
    for handle in handles {
        if let Err(e) = handle.await {
            tracing::error!("Play task aborted: {}", e);
        }
    }

    Ok(())
}
