use std::{panic, sync::Arc};

use anyhow::Context as _;
use clock_lib::{
    CanonicalTime, ClockEnv,
    source::FixedClock,
    ticker::{TickReceiver, Ticker},
};
use futures::FutureExt as _;
use mkenv::prelude::*;
use tracing_subscriber::fmt::TestWriter;

pub fn time(hours: u8, minutes: u8, seconds: u8) -> CanonicalTime {
    CanonicalTime::new(hours, minutes, seconds)
        .unwrap_or_else(|| panic!("invalid test time {hours}:{minutes}:{seconds}"))
}

pub trait IntoResult {
    type Out;

    fn into_result(self) -> anyhow::Result<Self::Out>;
}

impl IntoResult for () {
    type Out = ();

    fn into_result(self) -> anyhow::Result<Self::Out> {
        Ok(())
    }
}

impl<T, E> IntoResult for Result<T, E>
where
    anyhow::Error: From<E>,
{
    type Out = T;

    fn into_result(self) -> anyhow::Result<Self::Out> {
        self.map_err(From::from)
    }
}

pub fn init_env() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }

    let _ = tracing_subscriber::fmt()
        .with_writer(TestWriter::new())
        .try_init();

    Ok(())
}

/// Runs the test with a ticker whose system clock is stuck at `now`.
///
/// The tick period is read from the environment, like the real program does.
pub async fn wrap<F, R>(now: CanonicalTime, test: F) -> anyhow::Result<<R as IntoResult>::Out>
where
    F: AsyncFnOnce(Ticker, TickReceiver) -> R,
    R: IntoResult,
{
    init_env()?;
    let env = ClockEnv::define();
    env.try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("invalid clock environment")?;
    clock_lib::init_env(env);

    let ticker = Ticker::from_env(Arc::new(FixedClock(now)));
    let rx = ticker.subscribe();
    tracing::info!(
        "Created ticker at {now} with a period of {:?}",
        ticker.period()
    );

    match panic::AssertUnwindSafe(test(ticker, rx)).catch_unwind().await {
        Ok(r) => r.into_result().inspect_err(|e| tracing::info!("Test failed: {e:#}")),
        Err(e) => {
            tracing::info!("Test panicked");
            panic::resume_unwind(e)
        }
    }
}
