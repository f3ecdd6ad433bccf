use clock_lib::{
    Period, advance::advance_by, codec, error::ClockError, ticker::ClockMode,
    validate::CustomTimeInput,
};
use mkenv::prelude::*;
use tokio::time::Instant;


use base::time;

#[tokio::test(start_paused = true)]
async fn custom_time_crosses_noon() -> anyhow::Result<()> {
    base::with_ticker(time(9, 15, 0), async |mut ticker, mut rx| {
        assert_eq!(rx.current().time, time(9, 15, 0));

        ticker.apply_custom_text("11:59:58 AM")?;
        assert_eq!(rx.current().time, time(11, 59, 58));

        let times = base::collect(&mut rx, 3).await?;
        assert_eq!(times, [time(11, 59, 59), time(12, 0, 0), time(12, 0, 1)]);
        assert_eq!(times[1].period(), Period::Pm);
        assert_eq!(codec::format(times[1]), "12:00:00 PM");

        anyhow::Ok(())
    })
    .await
}

#[tokio::test(start_paused = true)]
async fn custom_time_follows_period() -> anyhow::Result<()> {
    base::with_ticker(time(9, 15, 0), async |mut ticker, mut rx| {
        let period = ticker.period();
        ticker.apply_custom_input(&CustomTimeInput {
            hours: 12,
            minutes: 59,
            seconds: 59,
            period: Period::Pm,
        })?;
        let start = rx.current().time;

        let begin = Instant::now();
        let times = base::collect(&mut rx, 10).await?;
        assert_eq!(begin.elapsed(), period * 10);
        assert_eq!(times[0], time(13, 0, 0));
        assert_eq!(times[9], advance_by(start.into(), 10).to_canonical());

        anyhow::Ok(())
    })
    .await
}

#[tokio::test(start_paused = true)]
async fn rejected_input_keeps_clock() -> anyhow::Result<()> {
    base::with_ticker(time(20, 0, 0), async |mut ticker, mut rx| {
        for text in ["", "8:00:00", "08:00 PM", "08:00:00 pm", "08:60:00 PM", "13:00:00 AM"] {
            let res = ticker.apply_custom_text(text);
            assert!(
                matches!(res, Err(ClockError::Format(_))),
                "`{text}` should be rejected"
            );
        }

        let res = ticker.apply_custom_input(&CustomTimeInput {
            seconds: 60,
            ..Default::default()
        });
        assert!(matches!(res, Err(ClockError::Range(_))));

        assert_eq!(ticker.mode(), ClockMode::System);
        let tick = rx.next().await?;
        assert!(!tick.custom);
        assert_eq!(tick.time, time(20, 0, 0));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test(start_paused = true)]
async fn latest_mode_wins() -> anyhow::Result<()> {
    base::with_ticker(time(20, 0, 0), async |mut ticker, mut rx| {
        ticker.apply_custom_text("01:00:00 AM")?;
        ticker.apply_custom_text("05:30:00 PM")?;
        assert_eq!(rx.current().time, time(17, 30, 0));

        let times = base::collect(&mut rx, 4).await?;
        assert_eq!(
            times,
            [time(17, 30, 1), time(17, 30, 2), time(17, 30, 3), time(17, 30, 4)]
        );

        anyhow::Ok(())
    })
    .await
}

#[tokio::test(start_paused = true)]
async fn ticker_period_from_env() -> anyhow::Result<()> {
    base::with_ticker(time(7, 0, 0), async |ticker, mut rx| {
        let period = clock_lib::env().tick_interval.get();
        assert_eq!(ticker.period(), period);

        let begin = Instant::now();
        rx.next().await?;
        assert_eq!(begin.elapsed(), period);

        anyhow::Ok(())
    })
    .await
}
