use std::{error::Error, time::Duration};

use once_cell::sync::OnceCell;

use crate::projection::Widget;

fn parse_tick_interval(input: &str) -> Result<Duration, Box<dyn Error>> {
    match input.parse()? {
        0 => Err("the tick interval must be greater than 0".into()),
        ms => Ok(Duration::from_millis(ms)),
    }
}

mkenv::make_config! {
    /// The environment used by this crate.
    pub struct ClockEnv {
        /// The period of the clock ticks.
        pub tick_interval: {
            var_name: "CLOCK_TICK_INTERVAL_MS",
            layers: [
                parsed<Duration>(parse_tick_interval),
                or_default_val(|| Duration::from_secs(1)),
            ],
            description: "The period of the clock ticks, in milliseconds",
            default_val_fmt: "1000",
        },

        /// The widget shown when none is selected.
        pub default_widget: {
            var_name: "CLOCK_DEFAULT_WIDGET",
            layers: [
                parsed_from_str<Widget>(),
                or_default_val(|| Widget::Digital),
            ],
            description: "The widget shown when none is selected (digital, analog, pomodoro, \
                aquarium, binary, flower, geometric, eyes or day-night)",
            default_val_fmt: "digital",
        },

        /// Whether a malformed custom time given at startup is an error, rather than falling back
        /// to the system time.
        pub strict_custom_time: {
            var_name: "CLOCK_STRICT_CUSTOM_TIME",
            layers: [
                parsed_from_str<bool>(),
                or_default_val(|| true),
            ],
            description: "Whether a malformed custom time given at startup is an error (boolean)",
            default_val_fmt: "true",
        },
    }
}

static ENV: OnceCell<ClockEnv> = OnceCell::new();

/// Initializes the provided library environment as global.
///
/// If this function has already been called, the provided environment will be ignored.
pub fn init_env(env: ClockEnv) {
    let _ = ENV.set(env);
}

/// Returns a static reference to the global library environment.
///
/// **Caution**: To use this function, the [`init_env()`] function must have been called at the start
/// of the program.
pub fn env() -> &'static ClockEnv {
    ENV.get().unwrap()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::parse_tick_interval;

    #[test]
    fn tick_interval_in_ms() {
        assert_eq!(
            parse_tick_interval("250").ok(),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn zero_tick_interval() {
        assert!(parse_tick_interval("0").is_err());
        assert!(parse_tick_interval("-5").is_err());
    }
}
