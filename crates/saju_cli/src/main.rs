use clap::{Args, Parser, Subcommand};
use saju_calendar::{gregorian_from_jdn, SolarDate};
use saju_report::{analyze, daily, leap_month_of, report_to_text, BirthInput};

/// JDN of the Unix epoch day 1970-01-01, for deriving today's civil date
/// from the system clock.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars (saju) analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Subject name
    #[arg(long, default_value = "subject")]
    name: String,
    /// Birth year (1900-2100)
    year: i32,
    /// Birth month
    month: u32,
    /// Birth day
    day: u32,
    /// Birth hour, 0-23
    hour: u32,
    /// Birth minute
    #[arg(long, default_value = "0")]
    minute: u32,
    /// Gender: 남/여 or male/female
    #[arg(long)]
    gender: String,
    /// Interpret the date as a lunar calendar date
    #[arg(long)]
    lunar: bool,
    /// The lunar month is the leap month
    #[arg(long)]
    leap_month: bool,
}

impl BirthArgs {
    fn into_input(self) -> BirthInput {
        BirthInput {
            name: self.name,
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            gender: self.gender,
            is_lunar: self.lunar,
            is_leap_month: self.leap_month,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full four-pillars analysis as JSON
    Analyze {
        #[command(flatten)]
        birth: BirthArgs,
        /// Anchor date for ages and yearly fortunes (YYYY-MM-DD, default today)
        #[arg(long)]
        today: Option<String>,
        /// Render the plain-text report instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// Daily fortune for one calendar day
    Daily {
        #[command(flatten)]
        birth: BirthArgs,
        /// Target date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Leap month of a lunar year (0 = none)
    LeapMonth {
        /// Lunar year (1900-2100)
        year: i32,
    },
}

fn parse_date(raw: &str) -> SolarDate {
    let mut parts = raw.splitn(3, '-');
    let parsed = (|| {
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        Some(SolarDate::new(year, month, day))
    })();
    match parsed {
        Some(date) => date,
        None => {
            eprintln!("Invalid date: {raw} (expected YYYY-MM-DD)");
            std::process::exit(1);
        }
    }
}

fn today_from_clock() -> SolarDate {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (year, month, day) = gregorian_from_jdn(UNIX_EPOCH_JDN + secs as i64 / 86_400);
    SolarDate::new(year, month, day)
}

fn resolve_date(raw: Option<String>) -> SolarDate {
    raw.map_or_else(today_from_clock, |s| parse_date(&s))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { birth, today, text } => {
            let input = birth.into_input();
            let today = resolve_date(today);
            match analyze(&input, today) {
                Ok(report) => {
                    if text {
                        println!("{}", report_to_text(&report));
                    } else {
                        match serde_json::to_string_pretty(&report) {
                            Ok(json) => println!("{json}"),
                            Err(e) => {
                                eprintln!("Failed to serialize report: {e}");
                                std::process::exit(1);
                            }
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Analysis failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Daily { birth, date } => {
            let input = birth.into_input();
            let date = resolve_date(date);
            match daily(&input, date) {
                Ok(report) => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {e}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Daily fortune failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::LeapMonth { year } => match leap_month_of(year) {
            Ok(info) => match serde_json::to_string(&info) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to serialize: {e}");
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Lookup failed: {e}");
                std::process::exit(1);
            }
        },
    }
}
