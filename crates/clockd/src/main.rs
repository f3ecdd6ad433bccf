//! The clock driver.
//!
//! Runs a single clock, either on the system time or on a custom time advancing by one second
//! per tick, and prints the projection of the chosen widget at each tick.

use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Context as _;
use chrono::{Locale, NaiveDate};
use clap::Parser as _;
use clock_lib::{
    ClockEnv,
    projection::{Projector, Widget},
    source::{SystemClock, TimeSource},
    ticker::{TickReceiver, Ticker},
};
use mkenv::prelude::*;
use tokio::signal;

mod render;

#[derive(clap::Parser)]
struct Args {
    /// The widget to show. Defaults to the `CLOCK_DEFAULT_WIDGET` environment variable.
    #[arg(short, long, value_parser = clap::value_parser!(Widget))]
    widget: Option<Widget>,
    /// Runs the clock from this time instead of the system time, e.g. "07:30:00 PM".
    #[arg(short, long)]
    custom: Option<String>,
    /// The number of ticks to show before exiting. Runs until Ctrl-C otherwise.
    #[arg(short = 'n', long)]
    ticks: Option<u64>,
    /// Prints each projection as a JSON line.
    #[arg(long)]
    json: bool,
    /// Prints the current date before the first tick. Only available with the system time.
    #[arg(long, conflicts_with = "custom")]
    show_date: bool,
}

#[derive(Clone, Copy)]
enum Output {
    Text,
    Json,
}

fn setup_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::format_err!("{e}"))
}

/// Formats the date in its long Spanish form, like `sábado, 17 de octubre de 2026`.
fn long_date(date: NaiveDate) -> String {
    date.format_localized("%A, %-d de %B de %Y", Locale::es_ES)
        .to_string()
}

fn print_tick<W: Write>(
    out: &mut W,
    projector: &mut Projector,
    rx: &mut TickReceiver,
    output: Output,
) -> anyhow::Result<()> {
    let tick = rx.current();
    let projection = projector.project(tick.time);

    let line = match output {
        Output::Text => render::describe(&projection),
        Output::Json => render::json(&projection).context("couldn't serialize the projection")?,
    };
    writeln!(out, "{line}").context("couldn't write the tick")?;
    out.flush().context("couldn't flush the output")
}

/// Prints the current tick, then each following one, until `ticks` were printed.
async fn drive<W: Write>(
    out: &mut W,
    mut projector: Projector,
    mut rx: TickReceiver,
    output: Output,
    ticks: Option<u64>,
) -> anyhow::Result<u64> {
    let mut printed = 0;

    while ticks.is_none_or(|max| printed < max) {
        if printed > 0 {
            let tick = rx.next().await.context("the clock stopped")?;
            tracing::debug!(time = ?tick.time, custom = tick.custom, "Tick received");
        }
        print_tick(out, &mut projector, &mut rx, output)?;
        printed += 1;
    }

    Ok(printed)
}

async fn shutdown_signal() -> anyhow::Result<()> {
    signal::ctrl_c()
        .await
        .context("couldn't install the Ctrl-C handler")?;
    tracing::info!("Received Ctrl-C, stopping the clock");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("couldn't get environment file"),
        _ => (),
    }
    setup_tracing()?;
    let args = Args::parse();

    let env = ClockEnv::define();
    env.try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("couldn't initialize environment")?;
    clock_lib::init_env(env);
    let env = clock_lib::env();
    let widget = args.widget.unwrap_or_else(|| env.default_widget.get());
    let strict = env.strict_custom_time.get();

    let source = Arc::new(SystemClock);
    if args.show_date {
        if let Some(date) = source.today() {
            println!("{}", long_date(date));
        }
    }

    let mut ticker = Ticker::from_env(source);
    let period = ticker.period();
    let rx = ticker.subscribe();

    if let Some(custom) = &args.custom {
        match ticker.apply_custom_text(custom) {
            Ok(()) => (),
            Err(e) if strict => {
                return Err(e).with_context(|| format!("invalid custom time `{custom}`"));
            }
            Err(_) => tracing::warn!("Falling back to the system time"),
        }
    }

    tracing::info!(%widget, ?period, mode = ?ticker.mode(), "Starting the clock");

    let output = if args.json {
        Output::Json
    } else {
        Output::Text
    };
    let mut stdout = io::stdout().lock();

    tokio::select! {
        printed = drive(&mut stdout, Projector::new(widget), rx, output, args.ticks) => {
            let printed = printed?;
            tracing::info!("Printed {printed} ticks");
        }
        res = shutdown_signal() => res?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use chrono::NaiveDate;
    use clap::{Parser as _, error::ErrorKind};
    use clock_lib::{
        CanonicalTime,
        projection::{Projector, Widget},
        source::FixedClock,
        ticker::Ticker,
    };
    use tokio::time::Instant;

    use super::{Args, Output, drive, long_date};

    fn ticker() -> Ticker {
        Ticker::new(
            Arc::new(FixedClock(CanonicalTime::new(22, 15, 0).unwrap())),
            Duration::from_secs(1),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn prints_bounded_ticks() {
        let mut ticker = ticker();
        ticker.apply_custom_text("11:59:59 PM").unwrap();
        let rx = ticker.subscribe();

        let mut out = Vec::new();
        let begin = Instant::now();
        let printed = drive(&mut out, Projector::new(Widget::Digital), rx, Output::Text, Some(3))
            .await
            .unwrap();

        assert_eq!(printed, 3);
        assert_eq!(begin.elapsed(), Duration::from_secs(2));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "11:59:59 PM\n12:00:00 AM\n12:00:01 AM\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn prints_json_lines() {
        let ticker = ticker();
        let rx = ticker.subscribe();

        let mut out = Vec::new();
        drive(&mut out, Projector::new(Widget::Binary), rx, Output::Json, Some(2))
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["widget"], "binary");
            assert_eq!(value["hours"], serde_json::json!([1, 0, 1, 0]));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_ticks_prints_nothing() {
        let ticker = ticker();
        let mut out = Vec::new();
        let printed = drive(
            &mut out,
            Projector::new(Widget::Digital),
            ticker.subscribe(),
            Output::Text,
            Some(0),
        )
        .await
        .unwrap();
        assert_eq!(printed, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn show_date_needs_system_time() {
        let args = Args::try_parse_from(["clockd", "--show-date", "-n", "2"]).unwrap();
        assert!(args.show_date);
        assert!(args.custom.is_none());

        let err = match Args::try_parse_from(["clockd", "--custom", "01:00:00 AM", "--show-date"])
        {
            Ok(_) => panic!("--show-date should conflict with --custom"),
            Err(e) => e,
        };
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn spanish_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(long_date(date), "sábado, 17 de octubre de 2026");
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(long_date(date), "lunes, 2 de marzo de 2026");
    }
}
