use std::sync::Arc;

use clap::Parser;
use tracing::info;

use recipe_calc_rs::cli::{Cli, Command};
use recipe_calc_rs::config::Settings;
use recipe_calc_rs::controller::{
    ControllerEvent, ControllerPhase, DisplayState, FormInput, TaskController, run_calculation,
};
use recipe_calc_rs::error::{RecipeError, Result};
use recipe_calc_rs::interface::{collect_form_input, display_result, prompt_yes_no};
use recipe_calc_rs::logging;
use recipe_calc_rs::store::{MongoSink, RecordSink};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::from_cli(&cli);
    info!(?settings, "starting");

    match cli.command.unwrap_or_default() {
        Command::Form => cmd_form(settings).await,
        Command::Calc {
            recipe,
            meat,
            cheese,
            vegetables,
            sauce,
            format,
            json,
        } => {
            let input = FormInput {
                recipe,
                meat,
                cheese,
                vegetables,
                sauce,
                report_format: format,
            };
            cmd_calc(settings, input, json).await
        }
    }
}

/// Interactive form: collect input, calculate in the background, show the result.
async fn cmd_form(settings: Settings) -> Result<()> {
    let sink: Arc<dyn RecordSink> = Arc::new(MongoSink::new(settings.store.clone()));
    let (controller, mut events) = TaskController::new(settings.output_dir.clone(), sink);
    let mut display = DisplayState::new();

    loop {
        display.phase = ControllerPhase::CollectingInput;
        let input = tokio::task::spawn_blocking(collect_form_input)
            .await
            .map_err(|e| RecipeError::TaskFailed(e.to_string()))??;

        controller.submit(input)?;

        while let Some(event) = events.recv().await {
            display.handle(&event);
            if matches!(event, ControllerEvent::Finished(_)) {
                break;
            }
        }

        display_result(&display);

        let again = tokio::task::spawn_blocking(|| prompt_yes_no("Рассчитать еще?", true))
            .await
            .map_err(|e| RecipeError::TaskFailed(e.to_string()))??;
        if !again {
            break;
        }
    }

    Ok(())
}

/// One-shot calculation from command-line values.
async fn cmd_calc(settings: Settings, input: FormInput, json: bool) -> Result<()> {
    let sink = MongoSink::new(settings.store.clone());
    let outcome = run_calculation(input, &settings.output_dir, &sink).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary())?);
    } else {
        let mut display = DisplayState::new();
        let success = outcome.is_success();
        display.apply(&Ok(outcome));
        display_result(&display);
        if !success {
            std::process::exit(2);
        }
    }

    Ok(())
}
