use chrono::NaiveDate;
use clap::Parser;
use rashi_mailer::render;
use rashi_mailer::utils::logger;
use rashi_mailer::Sign;

/// Print today's predictions to the terminal without sending anything.
#[derive(Parser, Debug)]
#[command(name = "preview")]
#[command(about = "Preview daily horoscope predictions on stdout")]
#[command(version)]
struct Args {
    /// Zodiac sign to preview. Omit to print all twelve.
    sign: Option<Sign>,

    /// Date to generate for (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Emit the full HTML email body instead of plain text
    #[arg(long, requires = "sign")]
    html: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    tracing::debug!("Previewing predictions for {}", date);

    match args.sign {
        Some(sign) if args.html => {
            println!("{}", render::email_body("Preview", sign, date));
        }
        Some(sign) => {
            println!("{}", render::plain_text(sign, date));
        }
        None => {
            for sign in Sign::ALL {
                println!("{}", render::plain_text(sign, date));
                println!("{}", "=".repeat(60));
            }
        }
    }
}
