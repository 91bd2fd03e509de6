use std::{process, sync::Arc};

use recipe_admin::{
    application::{admin::AdminPanelController, error::AppError},
    config::{self, Command},
    infra::{http::RestClient, telemetry},
    presentation::admin::views::AdminToastItem,
};
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let client = Arc::new(RestClient::from_settings(&settings.api)?);
    let mut panel = AdminPanelController::new(client.clone(), client, settings.panel.page_size);

    let result = match cli_args.command {
        Command::Users(args) => commands::users(&mut panel, args.action).await,
        Command::Recipes(args) => commands::recipes(&mut panel, args.action).await,
    };

    for toast in panel.drain_toasts() {
        eprintln!("{}", AdminToastItem::from(&toast));
    }

    result
}
