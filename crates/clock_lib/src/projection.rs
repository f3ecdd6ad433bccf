//! The projections of a time onto the visual parameters of each clock widget.
//!
//! Each submodule holds the pure functions of one widget. The [`Projector`] type dispatches
//! a [`CanonicalTime`] to the widget it was built for, and keeps the little state some
//! widgets need between two ticks.

use core::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::time::CanonicalTime;

pub mod analog;
pub mod binary;
pub mod day_night;
pub mod digital;
pub mod eyes;
pub mod flower;
pub mod geometric;
pub mod ratio;

/// The error emitted when parsing an unknown widget name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown widget `{0}` (expected one of: {names})", names = Widget::names())]
pub struct UnknownWidget(pub String);

/// The clock widgets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// The digital readout.
    Digital,
    /// The clock with hands.
    Analog,
    /// The bit columns.
    Binary,
    /// The three water tanks.
    Aquarium,
    /// The three progress rings.
    Pomodoro,
    /// The triangle, square and circle growing with the time.
    Geometric,
    /// The flowers losing their petals.
    Flower,
    /// The blinking eyes.
    Eyes,
    /// The sky with the sun and the moon.
    DayNight,
}

impl Widget {
    /// All the widgets, in menu order.
    pub const ALL: [Widget; 9] = [
        Widget::Digital,
        Widget::Analog,
        Widget::Pomodoro,
        Widget::Aquarium,
        Widget::Binary,
        Widget::Flower,
        Widget::Geometric,
        Widget::Eyes,
        Widget::DayNight,
    ];

    /// The name of the widget, as accepted by its [`FromStr`] implementation.
    pub fn name(self) -> &'static str {
        match self {
            Widget::Digital => "digital",
            Widget::Analog => "analog",
            Widget::Binary => "binary",
            Widget::Aquarium => "aquarium",
            Widget::Pomodoro => "pomodoro",
            Widget::Geometric => "geometric",
            Widget::Flower => "flower",
            Widget::Eyes => "eyes",
            Widget::DayNight => "day-night",
        }
    }

    fn names() -> String {
        Self::ALL.map(Widget::name).join(", ")
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Widget {
    type Err = UnknownWidget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|w| w.name() == s || (s == "day_night" && *w == Widget::DayNight))
            .ok_or(UnknownWidget(s))
    }
}

/// The visual parameters of a widget for a given time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Projection {
    /// See [`digital::readout`].
    Digital(digital::DigitalReadout),
    /// See [`analog::angles`].
    Analog(analog::HandAngles),
    /// See [`binary::digits`].
    Binary(binary::BinaryDigits),
    /// See [`ratio::water_levels`].
    Aquarium(ratio::WaterLevels),
    /// See [`ratio::rings`].
    Pomodoro(ratio::PomodoroRings),
    /// See [`geometric::shapes`].
    Geometric(geometric::Shapes),
    /// See [`flower::petals`].
    Flower(flower::Petals),
    /// See [`eyes::BlinkTracker`].
    Eyes(eyes::Blinks),
    /// See [`day_night::scene`].
    DayNight(day_night::Scene),
}

impl Projection {
    /// The widget this projection is for.
    pub fn widget(&self) -> Widget {
        match self {
            Projection::Digital(_) => Widget::Digital,
            Projection::Analog(_) => Widget::Analog,
            Projection::Binary(_) => Widget::Binary,
            Projection::Aquarium(_) => Widget::Aquarium,
            Projection::Pomodoro(_) => Widget::Pomodoro,
            Projection::Geometric(_) => Widget::Geometric,
            Projection::Flower(_) => Widget::Flower,
            Projection::Eyes(_) => Widget::Eyes,
            Projection::DayNight(_) => Widget::DayNight,
        }
    }
}

/// Projects the times of a single widget.
///
/// Each widget owns its projector, so no state is shared between two widgets showing the
/// same time.
#[derive(Clone, Debug)]
pub struct Projector {
    widget: Widget,
    blinks: eyes::BlinkTracker,
}

impl Projector {
    /// Returns a projector for the provided widget.
    pub fn new(widget: Widget) -> Self {
        Self {
            widget,
            blinks: eyes::BlinkTracker::default(),
        }
    }

    /// The widget of this projector.
    #[inline]
    pub fn widget(&self) -> Widget {
        self.widget
    }

    /// Returns the visual parameters of the widget for the provided time.
    pub fn project(&mut self, time: CanonicalTime) -> Projection {
        match self.widget {
            Widget::Digital => Projection::Digital(digital::readout(time)),
            Widget::Analog => Projection::Analog(analog::angles(time)),
            Widget::Binary => Projection::Binary(binary::digits(time)),
            Widget::Aquarium => Projection::Aquarium(ratio::water_levels(time)),
            Widget::Pomodoro => Projection::Pomodoro(ratio::rings(time)),
            Widget::Geometric => Projection::Geometric(geometric::shapes(time)),
            Widget::Flower => Projection::Flower(flower::petals(time)),
            Widget::Eyes => Projection::Eyes(self.blinks.update(time)),
            Widget::DayNight => Projection::DayNight(day_night::scene(time)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Projection, Projector, UnknownWidget, Widget};
    use crate::CanonicalTime;

    #[test]
    fn parse_widget_names() {
        for widget in Widget::ALL {
            assert_eq!(widget.name().parse(), Ok(widget));
        }
        assert_eq!(" Analog ".parse(), Ok(Widget::Analog));
        assert_eq!("day_night".parse(), Ok(Widget::DayNight));
        assert_eq!(
            "sundial".parse::<Widget>(),
            Err(UnknownWidget("sundial".to_owned()))
        );
    }

    #[test]
    fn every_widget_projects_every_hour() {
        for widget in Widget::ALL {
            let mut projector = Projector::new(widget);
            for h in 0..24 {
                let time = CanonicalTime::new(h, 59, 59).unwrap();
                assert_eq!(projector.project(time).widget(), widget);
            }
        }
    }

    #[test]
    fn tagged_json() {
        let mut projector = Projector::new(Widget::Analog);
        let projection = projector.project(CanonicalTime::new(3, 0, 0).unwrap());
        let json = serde_json::to_value(&projection).unwrap();
        assert_eq!(json["widget"], "analog");
        assert_eq!(json["hour"], 90.);
        assert!(matches!(projection, Projection::Analog(_)));
    }
}
