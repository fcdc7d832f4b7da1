use std::{
    io::{self, IsTerminal, Read},
    process,
    sync::Arc,
};

use colored::Colorize;
use daily_budget::{
    config::{Config, ConfigManager},
    init,
    ledger::{parse_entry_date, EntryDraft, Ledger},
    report::{CaloriesReporter, CaloriesStatus, CashReporter, CashStatus},
    time::{Clock, FixedClock, SystemClock},
    utils::build_info,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

#[derive(Debug, Default)]
struct Options {
    limit: Option<f64>,
    currency: Option<String>,
    today: Option<String>,
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage();
        process::exit(1);
    };

    if command == "version" {
        println!("{}", build_info::current());
        return Ok(());
    }

    let options = parse_options(args)?;
    let config = ConfigManager::new().load()?;

    match command.as_str() {
        "calories" => {
            let ledger = load_ledger(options.limit.unwrap_or(config.calories_limit), &options)?;
            print_totals(&ledger);
            let status = CaloriesReporter::status(&ledger);
            let line = status.to_string();
            match status {
                CaloriesStatus::Allowed(_) => println!("{}", line.green()),
                CaloriesStatus::Stop => println!("{}", line.red()),
            }
        }
        "cash" => {
            let ledger = load_ledger(options.limit.unwrap_or(config.cash_limit), &options)?;
            print_totals(&ledger);
            let code = currency_or_default(&options, &config);
            let status = CashReporter::status(&ledger, &code);
            let line = status.to_string();
            match status {
                CashStatus::Remaining { .. } => println!("{}", line.green()),
                CashStatus::UnsupportedCurrency { .. } => println!("{}", line.yellow()),
                CashStatus::Exhausted | CashStatus::Debt { .. } => println!("{}", line.red()),
            }
        }
        "summary" => {
            let ledger = load_ledger(options.limit.unwrap_or(config.cash_limit), &options)?;
            println!("{}", serde_json::to_string_pretty(&ledger.summary())?);
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for `{flag}`"))?;
        match flag.as_str() {
            "--limit" => {
                let limit = value
                    .parse::<f64>()
                    .map_err(|_| format!("invalid limit `{value}`"))?;
                options.limit = Some(limit);
            }
            "--currency" => options.currency = Some(value),
            "--today" => options.today = Some(value),
            other => return Err(format!("unknown option `{other}`")),
        }
    }
    Ok(options)
}

fn currency_or_default(options: &Options, config: &Config) -> String {
    options
        .currency
        .clone()
        .unwrap_or_else(|| config.currency.clone())
}

fn load_ledger(limit: f64, options: &Options) -> Result<Ledger, Box<dyn std::error::Error>> {
    let clock: Arc<dyn Clock> = match options.today.as_deref() {
        Some(raw) => Arc::new(FixedClock::new(parse_entry_date(raw)?)),
        None => Arc::new(SystemClock),
    };

    let mut ledger = Ledger::with_clock(limit, Arc::clone(&clock));
    for draft in read_drafts()? {
        ledger.add_entry(draft.into_entry(clock.as_ref())?);
    }
    tracing::debug!(entries = ledger.len(), limit, "ledger loaded from stdin");
    Ok(ledger)
}

fn read_drafts() -> Result<Vec<EntryDraft>, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&buffer)?)
}

fn print_totals(ledger: &Ledger) {
    println!("Сегодня: {}", ledger.today_total());
    println!("Осталось: {}", ledger.remaining_today());
    println!("За неделю: {}", ledger.week_total());
}

fn print_usage() {
    eprintln!(
        "Usage:\n  \
         daily_budget_cli calories [--limit N] [--today DD.MM.YYYY] < entries.json\n  \
         daily_budget_cli cash [--limit N] [--currency usd|eur|rub] [--today DD.MM.YYYY] < entries.json\n  \
         daily_budget_cli summary [--limit N] [--today DD.MM.YYYY] < entries.json\n  \
         daily_budget_cli version\n\n\
         Without --limit, calories uses the config calories_limit; cash and summary use cash_limit.\n\
         entries.json holds [{{\"amount\": 145, \"comment\": \"coffee\", \"date\": \"08.11.2019\"}}, ...]"
    );
}
