use anyhow::Context;
use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use analysis::batch::{self, LogSource};
use collector::config::{Cli, SourceKind};

#[derive(Debug, serde::Serialize)]
struct Output<'r> {
    player_columns: &'static [&'static str],
    gamemode_column: &'static str,
    map_column: &'static str,
    date_columns: &'static [&'static str],
    weekday_column: &'static str,
    score_columns: &'static [&'static str],
    stat_columns: Vec<String>,
    summary: &'r common::BatchSummary,
    tables: &'r common::MatchTables,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.silent {
        tracing::Level::WARN
    } else {
        cli.log_level
    };
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().starts_with("collector") || meta.target().starts_with("analysis")
        }));
    tracing::subscriber::set_global_default(registry)?;

    let ids = std::fs::read_to_string(&cli.ids)
        .with_context(|| format!("reading log ids from {}", cli.ids.display()))?;
    let log_ids = collector::ids::parse_log_ids(&ids);
    tracing::info!("Loaded {} log ids", log_ids.len());

    let mut config = analysis::PipelineConfig::default();
    if let Some(path) = cli.players.as_ref() {
        let players = std::fs::read_to_string(path)
            .with_context(|| format!("reading players from {}", path.display()))?;
        let players = collector::ids::parse_participants(&players);
        tracing::info!("Restricting logs to {} players", players.len());
        config.allowed_participants = Some(players);
    }
    let pipeline = analysis::Pipeline::new(config);
    tracing::debug!(
        timezone = %pipeline.config().timezone,
        version = pipeline.config().supported_version,
        "Pipeline configured"
    );

    let source: Box<dyn LogSource> = match cli.source {
        SourceKind::Web => Box::new(collector::logs_api::Client::new(
            cli.base_url.clone(),
            cli.insecure,
        )?),
        SourceKind::Dir => {
            let dir = cli.dir.clone().context("--dir is required for the dir source")?;
            Box::new(collector::storage::DirectorySource::new(dir))
        }
    };

    tracing::info!("Extracting log data and weeding out invalid logs");
    let result = batch::run(&pipeline, source.as_ref(), &log_ids).await?;
    tracing::info!("{}", result.summary);

    if let Some(path) = cli.output.as_ref() {
        let output = Output {
            player_columns: &common::tables::PLAYER_COLUMNS,
            gamemode_column: common::tables::GAMEMODE_COLUMN,
            map_column: common::tables::MAP_COLUMN,
            date_columns: &common::tables::DATE_COLUMNS,
            weekday_column: common::tables::WEEKDAY_COLUMN,
            score_columns: &common::tables::SCORE_COLUMNS,
            stat_columns: common::tables::stat_columns(),
            summary: &result.summary,
            tables: &result.tables,
        };

        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &output)?;
        tracing::info!("Stored tables in {}", path.display());
    }

    Ok(())
}
