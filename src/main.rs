use clap::Parser;
use release_manifest::utils::logger;
use release_manifest::{
    CliConfig, DockerHubRegistry, LocalStorage, ReleaseEngine, ReleaseError, ReleaseOutcome,
    SystemGit,
};

fn fail(e: &ReleaseError) -> ! {
    tracing::error!(
        "❌ Release failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting releaser");
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    let storage = LocalStorage::new(&config.repo);
    let registry = DockerHubRegistry::from_config(&config);
    let git = SystemGit::new(&config.repo);
    let engine = ReleaseEngine::new(storage, registry, git, config);

    match engine.run().await {
        Ok(ReleaseOutcome::NoUpdates { .. }) => {
            println!("No updates found.");
        }
        Ok(ReleaseOutcome::Planned { version, report }) => {
            for update in &report.updates {
                println!(
                    "  {}: {} -> {} ({})",
                    update.name, update.from, update.to, update.severity
                );
            }
            println!("Dry run: next release would be {}", version);
        }
        Ok(ReleaseOutcome::Released { version, .. }) => {
            println!("✅ Release {} created locally.", version);
            println!("Run 'git push --tags origin master' to publish.");
        }
        Err(e) => fail(&e),
    }
}
