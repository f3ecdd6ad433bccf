use std::fmt::Write as _;

use clock_lib::projection::{Projection, flower::Flower};
use itertools::Itertools as _;

fn petals(out: &mut String, name: &str, flower: &Flower) {
    let shape = (0..flower.total)
        .map(|i| if flower.is_fallen(i) { '.' } else { '*' })
        .collect::<String>();
    let _ = write!(out, "{name} {shape} ({}/{})", flower.remaining(), flower.total);
}

/// Returns a one-line description of the projection, for a terminal.
pub fn describe(projection: &Projection) -> String {
    let mut out = String::new();

    match projection {
        Projection::Digital(d) => out.push_str(&d.text),
        Projection::Analog(a) => {
            let _ = write!(
                out,
                "hour {:.1}°, minute {:.1}°, second {:.1}°",
                a.hour, a.minute, a.second
            );
        }
        Projection::Binary(b) => out.push_str(&b.to_bit_string()),
        Projection::Aquarium(w) => {
            let _ = write!(
                out,
                "tanks {:.1}% {:.1}% {:.1}%",
                w.hours, w.minutes, w.seconds
            );
        }
        Projection::Pomodoro(p) => {
            let _ = write!(
                out,
                "rings {:.3} {:.3} {:.3} (offsets {:.1} {:.1} {:.1})",
                p.progress.hours,
                p.progress.minutes,
                p.progress.seconds,
                p.hours_offset,
                p.minutes_offset,
                p.seconds_offset
            );
        }
        Projection::Geometric(g) => {
            let _ = write!(
                out,
                "triangle {:.1}x{:.1}, square {:.1}, circle {:.1}",
                g.triangle_base, g.triangle_height, g.square_size, g.circle_size
            );
        }
        Projection::Flower(p) => {
            petals(&mut out, "h", &p.hours);
            out.push_str("  ");
            petals(&mut out, "m", &p.minutes);
            out.push_str("  ");
            petals(&mut out, "s", &p.seconds);
        }
        Projection::Eyes(b) => {
            let blinks = [("hours", b.hours), ("minutes", b.minutes), ("seconds", b.seconds)]
                .into_iter()
                .filter_map(|(name, blink)| blink.then_some(name))
                .join(", ");
            if blinks.is_empty() {
                out.push_str("no blink");
            } else {
                let _ = write!(out, "blink: {blinks}");
            }
        }
        Projection::DayNight(s) => {
            let _ = write!(
                out,
                "{} {} {:?}, stars {:.2}",
                s.readout,
                if s.is_night { "night" } else { "day" },
                s.sky.band,
                s.star_opacity
            );
        }
    }

    out
}

/// Returns the projection as a single JSON line.
pub fn json(projection: &Projection) -> serde_json::Result<String> {
    serde_json::to_string(projection)
}
