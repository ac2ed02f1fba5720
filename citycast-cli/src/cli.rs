use anyhow::Result;
use chrono::Local;
use citycast_core::{CityQuery, Config, FetchError, WeatherClient, WeatherReading};
use clap::{Parser, Subcommand};
use inquire::{Confirm, InquireError, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citycast", version, about = "City weather at a glance")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and an optional default country.
    Configure,

    /// Look up current weather for one city and exit.
    Show {
        /// City name, e.g. "London".
        city: String,

        /// Country qualifier, e.g. "us"; overrides the configured default.
        #[arg(long)]
        country: Option<String>,

        /// Print the reading as JSON instead of the text card.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show {
                city,
                country,
                json,
            }) => show(&city, country, json).await,
            None => interactive().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:")
        .with_help_message("Create one at https://home.openweathermap.org/api_keys")
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let country = Text::new("Default country qualifier (optional):")
        .with_placeholder("us")
        .with_help_message("Appended to every lookup as 'city,country'; leave blank for none")
        .prompt()?;
    config.country = Some(country.trim().to_lowercase()).filter(|c| !c.is_empty());

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn show(city: &str, country: Option<String>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let client = WeatherClient::from_config(&config)?;

    let mut query = CityQuery::new(city.trim());
    if let Some(country) = country.or(config.country) {
        query = query.with_country(country);
    }

    let reading = client.fetch_weather(&query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print_reading(&reading);
    }

    Ok(())
}

/// Prompt-lookup-confirm loop; Esc or Ctrl-C at any prompt exits.
async fn interactive() -> Result<()> {
    let config = Config::load()?;
    let client = WeatherClient::from_config(&config)?;

    loop {
        let city = match Text::new("City:")
            .with_placeholder("Enter City...")
            .with_help_message("Current weather for one city; Esc to quit")
            .prompt()
        {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let mut query = CityQuery::new(city.trim());
        if let Some(country) = config.country.clone() {
            query = query.with_country(country);
        }

        match client.fetch_weather(&query).await {
            Ok(reading) => print_reading(&reading),
            Err(FetchError::InvalidInput) => eprintln!("Please enter a city name."),
            Err(err) => eprintln!("{:#}", anyhow::Error::from(err)),
        }

        match Confirm::new("Look up another city?")
            .with_default(true)
            .prompt()
        {
            Ok(true) => {}
            Ok(false) => break,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn print_reading(reading: &WeatherReading) {
    let stamp = Local::now().format("%I:%M %P");
    println!();
    println!("{} Weather", reading.city);
    println!("{}", reading.description);
    println!("{} / {}", reading.celsius, reading.fahrenheit);
    println!("as of {stamp}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_parses_city_and_flags() {
        let cli =
            Cli::try_parse_from(["citycast", "show", "London", "--country", "us", "--json"])
                .unwrap();

        match cli.command {
            Some(Command::Show {
                city,
                country,
                json,
            }) => {
                assert_eq!(city, "London");
                assert_eq!(country.as_deref(), Some("us"));
                assert!(json);
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn show_defaults_to_text_output_without_country() {
        let cli = Cli::try_parse_from(["citycast", "show", "Paris"]).unwrap();

        match cli.command {
            Some(Command::Show {
                city,
                country,
                json,
            }) => {
                assert_eq!(city, "Paris");
                assert!(country.is_none());
                assert!(!json);
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["citycast"]).unwrap();
        assert!(cli.command.is_none());
    }
}
