use clap::Parser;
use color_normalizer::utils::{logger, validation::Validate};
use color_normalizer::{
    CliConfig, LocalStorage, NormalizeError, Normalizer, NormalizerConfig, RunSettings,
    DONE_MARKER,
};

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    tracing::info!(
        "Root: {}, rules: {}{}",
        settings.root,
        if settings.custom_rules {
            "custom".to_string()
        } else {
            settings.variant.to_string()
        },
        if settings.dry_run { ", dry run" } else { "" }
    );

    let storage = LocalStorage::new(&settings.root);
    let normalizer =
        Normalizer::new(storage, settings.targets, settings.rules).dry_run(settings.dry_run);

    match normalizer.run_with(|outcome| println!("{}", outcome)) {
        Ok(_) => println!("{}", DONE_MARKER),
        Err(e) => fail(&e),
    }
}

fn load_settings(cli: &CliConfig) -> color_normalizer::Result<RunSettings> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let config = NormalizerConfig::from_file(path)?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };
    RunSettings::resolve(cli, config.as_ref())
}

fn fail(e: &NormalizeError) -> ! {
    tracing::error!("{} (category: {:?})", e, e.category());
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Hint: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
