//! Display label sink

/// The five labels on the motion screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LabelId {
    /// Cumulative steps for the current day
    Steps,
    /// Floors climbed
    FloorsAscended,
    /// Floors descended
    FloorsDescended,
    /// Altitude change since the altimeter subscription started
    RelativeAltitude,
    /// Barometric pressure
    Pressure,
}

impl LabelId {
    /// Every label, in screen order
    pub const ALL: [LabelId; 5] = [
        LabelId::Steps,
        LabelId::FloorsAscended,
        LabelId::FloorsDescended,
        LabelId::RelativeAltitude,
        LabelId::Pressure,
    ];

    /// Labels owned by the pedometer handler
    pub const PEDOMETER: [LabelId; 3] = [
        LabelId::FloorsAscended,
        LabelId::FloorsDescended,
        LabelId::Steps,
    ];

    /// Labels owned by the altitude handler
    pub const ALTIMETER: [LabelId; 2] = [LabelId::RelativeAltitude, LabelId::Pressure];

    /// Fixed text shown before the value
    pub const fn prefix(&self) -> &'static str {
        match self {
            LabelId::Steps => "Steps today",
            LabelId::FloorsAscended => "Floors up",
            LabelId::FloorsDescended => "Floors down",
            LabelId::RelativeAltitude => "Rel Alt",
            LabelId::Pressure => "Pressure",
        }
    }

    /// Position in [`LabelId::ALL`]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// Destination for formatted label text
///
/// Writes are fire-and-forget: the sink keeps the last text per label and
/// any rendering failure is the sink's own concern.
pub trait LabelSink {
    /// Replace the text of one label
    fn set_text(&mut self, label: LabelId, text: &str);
}

impl<T: LabelSink + ?Sized> LabelSink for &mut T {
    fn set_text(&mut self, label: LabelId, text: &str) {
        (**self).set_text(label, text)
    }
}
