use clap::Parser;
use transfer_board::core::render;
use transfer_board::domain::ports::{ConfigProvider, Storage};
use transfer_board::utils::{logger, validation::Validate};
use transfer_board::{
    CliConfig, FilterEvent, LiveTransferSource, LocalStorage, MemoryPage, TransferBoard,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting transfer-board");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    let source = LiveTransferSource::from_config(&config);
    let mut board = TransferBoard::new(source, MemoryPage::new(), config.labels.clone());

    let init_result = board.init().await;
    if let Err(e) = &init_result {
        eprintln!("❌ {}", e.user_friendly_message());
    } else {
        if let Some(team) = &cli.team {
            board.handle(FilterEvent::TeamChanged(team.clone()));
        }
        if let Some(kind) = &cli.transfer_type {
            board.handle(FilterEvent::TypeChanged(kind.clone()));
        }
        tracing::info!(
            "Showing {} of {} transfers",
            board.filtered_transfers().len(),
            board.transfers().len()
        );
    }

    if cli.stdout {
        println!("{}", board.page().content_html());
    } else {
        let filters = board.filters().clone();
        let labels = board.labels().clone();
        let page = board.into_page();
        let content = page.content().cloned().unwrap_or_else(|| render::no_results(&labels));
        let document = render::page_document(&labels, page.team_options(), &filters, content);

        let storage = LocalStorage::new(config.output_path().to_string());
        let filename = config.output_filename();
        storage
            .write_file(filename, document.to_html().as_bytes())
            .await?;

        let written = storage.full_path(filename);
        tracing::info!("Page written to: {}", written.display());
        println!("📁 Output saved to: {}", written.display());
    }

    if init_result.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
