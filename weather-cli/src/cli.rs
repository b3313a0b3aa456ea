use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};

use crate::{app::WeatherApp, relay_client::RelayClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather relay client")]
pub struct Cli {
    /// Base URL of the weather relay.
    #[arg(
        long,
        global = true,
        env = "WEATHER_RELAY_URL",
        default_value = "http://localhost:5001"
    )]
    pub relay_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for cities until cancelled (default).
    Interactive,

    /// Show weather for a single city.
    Show {
        /// City name, e.g. "London".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut app = WeatherApp::new(RelayClient::new(&self.relay_url));

        match self.command.unwrap_or(Command::Interactive) {
            Command::Show { city } => {
                print!("{}", app.submit(&city).await.render());
            }
            Command::Interactive => {
                print!("{}", app.state().render());
                loop {
                    let input = match Text::new("City:")
                        .with_placeholder("Enter city name (e.g., London)")
                        .prompt()
                    {
                        Ok(input) => input,
                        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                            break;
                        }
                        Err(e) => return Err(e.into()),
                    };

                    if let Some(city) = app.begin(&input) {
                        print!("{}", app.state().render());
                        let outcome = app.client().get_weather(&city).await;
                        app.finish(outcome);
                    }
                    print!("{}", app.state().render());
                }
            }
        }

        Ok(())
    }
}
