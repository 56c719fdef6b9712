use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use brewcard::application::SessionManager;
use brewcard::domain::User;
use brewcard::infrastructure::credentials::{DEMO_EMAIL, DEMO_PASSWORD};
use brewcard::infrastructure::{
    AppConfig, CliArgs, Command, EphemeralSessionStore, InMemoryCredentialStore, StorageManager,
};
use brewcard::presentation::{LoginForm, MemberSummary, Navigator, RegisterForm};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_session_manager(config: &AppConfig) -> SessionManager {
    let credentials = InMemoryCredentialStore::with_demo_accounts()
        .with_store_latency(config.latency.credential_store());
    let restore = EphemeralSessionStore::new().with_latency(config.latency.restore());

    SessionManager::new(
        Arc::new(credentials),
        Arc::new(restore),
        config.session_options(),
    )
}

fn print_member(user: &User, json: bool) -> Result<()> {
    let summary = MemberSummary::from(user);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_text());
    }
    Ok(())
}

async fn run_demo(manager: &SessionManager, config: &AppConfig, json: bool) -> Result<()> {
    let restored = manager.restore().await?;
    println!(
        "Restored session: {}",
        restored.as_ref().map_or("none", |u| u.name())
    );

    if config.demo.show_credentials {
        println!("Demo credentials: {DEMO_EMAIL} / {DEMO_PASSWORD}");
    }

    if let Err(e) = LoginForm::new(DEMO_EMAIL, "not-the-password")
        .submit(manager)
        .await
    {
        println!("Sign-in with a wrong password: {}", LoginForm::message_for(&e));
    }

    let user = LoginForm::new(DEMO_EMAIL, DEMO_PASSWORD)
        .submit(manager)
        .await
        .map_err(|e| eyre!(LoginForm::message_for(&e)))?;
    println!();
    print_member(&user, json)?;
    println!();

    manager.logout();
    println!(
        "Signed out; current member: {}",
        manager.current_user().as_ref().map_or("none", User::name)
    );

    Ok(())
}

async fn run(manager: &SessionManager, config: &AppConfig, args: CliArgs) -> Result<()> {
    match args.command {
        Command::Login { email, password } => {
            let user = LoginForm::new(email, password)
                .submit(manager)
                .await
                .map_err(|e| eyre!(LoginForm::message_for(&e)))?;
            print_member(&user, args.json)
        }
        Command::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let response = RegisterForm::new(name, email, password, confirm_password)
                .submit(manager)
                .await
                .map_err(|e| eyre!(RegisterForm::message_for(&e)))?;
            println!("Account created for {}", response.user.email());
            println!("Next screen: {:?}", RegisterForm::route_after(&response));
            if response.signed_in {
                print_member(&response.user, args.json)?;
            }
            Ok(())
        }
        Command::Demo => run_demo(manager, config, args.json).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    init_logging(&config)?;

    info!(
        version = brewcard::VERSION,
        concurrency = %config.session.concurrency,
        "Starting Brewcard"
    );

    let manager = create_session_manager(&config);

    let mut navigator = Navigator::new(&manager);
    let routes = tokio::spawn(async move {
        while let Some(route) = navigator.next_route().await {
            info!(?route, "Route changed");
        }
    });

    let result = run(&manager, &config, args).await;

    drop(manager);
    let _ = routes.await;

    result
}
