//! Headless state for a soft range picker.
//!
//! Holds what a picker widget shows (the current range, the preset matching
//! it, the in-progress calendar selection) and applies user actions to it.
//! Rendering is left to the caller.

use chrono::NaiveDate;

use crate::{
    calendar::{IntoDay, truncate_to_day},
    clock::{Clock, SystemClock},
    config::PickerConfig,
    format::format_range,
    granularity::{Direction, Granularity},
    preset::{Preset, match_preset},
    range::DateRange,
};

/// A preset as offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetOption {
    pub preset: Preset,
    pub label:  String,
}

/// What choosing a preset did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The preset's range became the current value
    Applied(DateRange),
    /// `Custom` was chosen; the calendar is open for a free-form selection
    CalendarOpened,
    /// The picker is disabled and nothing changed
    Ignored,
}

/// Picker state driven by user actions and form writes.
#[derive(Debug, Clone)]
pub struct SoftRangePicker<C = SystemClock> {
    config:   PickerConfig,
    clock:    C,
    presets:  Vec<Preset>,
    value:    DateRange,
    selected: Preset,
    calendar: Option<Vec<NaiveDate>>,
    disabled: bool,
}

impl SoftRangePicker<SystemClock> {
    /// A picker reading the local wall clock.
    pub fn with_config(config: PickerConfig) -> Self {
        Self::new(config, SystemClock)
    }
}

impl Default for SoftRangePicker<SystemClock> {
    fn default() -> Self {
        Self::with_config(PickerConfig::default())
    }
}

impl<C: Clock> SoftRangePicker<C> {
    /// Creates a picker whose value is the first offered preset's range, or
    /// today when no presets are configured.
    pub fn new(config: PickerConfig, clock: C) -> Self {
        let presets = config.quick_presets();
        let today = clock.today();
        let initial = presets
            .first()
            .copied()
            .unwrap_or(Preset::Today)
            .range(today)
            .unwrap_or_else(|| DateRange::single(today));

        let mut picker = Self {
            config,
            clock,
            presets,
            value: initial,
            selected: Preset::Custom,
            calendar: None,
            disabled: false,
        };
        picker.set_value(initial);
        picker
    }

    /// Offered presets with their labels, `Custom` last.
    pub fn options(&self) -> Vec<PresetOption> {
        self.presets
            .iter()
            .copied()
            .chain(std::iter::once(Preset::Custom))
            .map(|preset| PresetOption {
                preset,
                label: self.config.locale.label(preset).to_string(),
            })
            .collect()
    }

    pub const fn value(&self) -> DateRange {
        self.value
    }

    /// The preset whose current range equals the value, or `Custom`.
    pub const fn selected(&self) -> Preset {
        self.selected
    }

    pub fn granularity(&self) -> Granularity {
        self.value.granularity()
    }

    /// The value as display text.
    pub fn formatted(&self) -> String {
        format_range(self.value.start(), self.value.end(), &self.config.locale)
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Writes a value from outside, e.g. a bound form model.
    ///
    /// Anything other than exactly two dates is replaced by today's range.
    /// Applies even while disabled.
    pub fn write_value<D: IntoDay + Clone>(&mut self, value: Option<&[D]>) {
        let range = match value.and_then(DateRange::from_pair) {
            Some(range) => range,
            None => {
                let today = self.clock.today();
                tracing::warn!(
                    len = ?value.map(<[D]>::len),
                    "malformed range value, using today"
                );
                Preset::Today.range(today).unwrap_or_else(|| DateRange::single(today))
            },
        };
        self.set_value(range);
    }

    /// Chooses a preset from the options.
    pub fn select_preset(&mut self, preset: Preset) -> Selection {
        if self.disabled {
            return Selection::Ignored;
        }
        if preset.is_custom() {
            self.open_calendar();
            return Selection::CalendarOpened;
        }

        let today = self.clock.today();
        match preset.range(today) {
            Some(range) => {
                tracing::debug!(%preset, %range, "preset selected");
                self.set_value(range);
                Selection::Applied(range)
            },
            None => {
                tracing::warn!(%preset, %today, "preset range outside calendar");
                Selection::Ignored
            },
        }
    }

    /// Steps to the previous range of the current granularity.
    pub fn step_backward(&mut self) -> Option<DateRange> {
        self.step(Direction::Backward)
    }

    /// Steps to the next range of the current granularity.
    pub fn step_forward(&mut self) -> Option<DateRange> {
        self.step(Direction::Forward)
    }

    /// Steps the value and returns the new one. Leaves the value unchanged and
    /// returns `None` when disabled or when the step leaves the calendar.
    pub fn step(&mut self, direction: Direction) -> Option<DateRange> {
        if self.disabled {
            return None;
        }

        let Some(range) = self.value.step(direction) else {
            tracing::warn!(value = %self.value, %direction, "step leaves the calendar");
            return None;
        };
        tracing::debug!(from = %self.value, to = %range, %direction, granularity = %self.granularity(), "stepped");
        self.set_value(range);
        Some(range)
    }

    /// Opens the calendar seeded with the current value.
    pub fn open_calendar(&mut self) {
        self.calendar = Some(vec![self.value.start(), self.value.end()]);
    }

    /// The in-progress calendar selection, if the calendar is open.
    pub fn calendar_selection(&self) -> Option<&[NaiveDate]> {
        self.calendar.as_deref()
    }

    /// Replaces the in-progress calendar selection, opening the calendar if needed.
    pub fn set_calendar_selection<D: IntoDay>(&mut self, selection: impl IntoIterator<Item = D>) {
        self.calendar = Some(selection.into_iter().map(truncate_to_day).collect());
    }

    /// Applies the calendar selection and closes the calendar.
    ///
    /// A selection holding only a start day applies that single day. An empty
    /// selection, or a closed calendar, applies nothing.
    pub fn apply_calendar(&mut self) -> Option<DateRange> {
        if self.disabled {
            return None;
        }

        let selection = self.calendar.take()?;
        let range = match selection.as_slice() {
            [] => return None,
            [start] => DateRange::single(*start),
            [start, end, ..] => DateRange::ordered(*start, *end),
        };
        self.set_value(range);
        Some(range)
    }

    /// Closes the calendar without applying its selection.
    pub fn cancel_calendar(&mut self) {
        self.calendar = None;
    }

    fn set_value(&mut self, range: DateRange) {
        self.value = range;
        self.selected = match_preset(range.start(), range.end(), &self.presets, self.clock.today());
        tracing::debug!(value = %range, selected = %self.selected, "value updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::FixedClock,
        test_utils::{date, datetime, range},
    };

    // 2024-03-13 is a Wednesday
    fn picker() -> SoftRangePicker<FixedClock> {
        SoftRangePicker::new(PickerConfig::default(), FixedClock(date(2024, 3, 13)))
    }

    #[test]
    fn test_initial_value_is_first_preset() {
        let picker = picker();
        assert_eq!(picker.value(), range((2024, 3, 13), (2024, 3, 13)));
        assert_eq!(picker.selected(), Preset::Today);
        assert_eq!(picker.granularity(), Granularity::Daily);
        assert_eq!(picker.formatted(), "3/13/2024");
    }

    #[test]
    fn test_initial_value_follows_configured_order() {
        let config = PickerConfig {
            presets: vec![Preset::ThisMonth, Preset::Today],
            ..PickerConfig::default()
        };
        let picker = SoftRangePicker::new(config, FixedClock(date(2024, 3, 13)));
        assert_eq!(picker.value(), range((2024, 3, 1), (2024, 3, 31)));
        assert_eq!(picker.selected(), Preset::ThisMonth);
        assert_eq!(picker.formatted(), "March 2024");
    }

    #[test]
    fn test_initial_value_without_presets_is_today() {
        let config = PickerConfig {
            presets: Vec::new(),
            ..PickerConfig::default()
        };
        let picker = SoftRangePicker::new(config, FixedClock(date(2024, 3, 13)));
        assert_eq!(picker.value(), DateRange::single(date(2024, 3, 13)));
        // Today is not offered, so nothing matches
        assert_eq!(picker.selected(), Preset::Custom);
        assert_eq!(picker.options().len(), 1);
    }

    #[test]
    fn test_options_append_custom_with_labels() {
        let options = picker().options();
        let presets: Vec<Preset> = options.iter().map(|option| option.preset).collect();
        assert_eq!(
            presets,
            vec![
                Preset::Today,
                Preset::ThisWeek,
                Preset::ThisMonth,
                Preset::PrevWeek,
                Preset::PrevMonth,
                Preset::ThisYear,
                Preset::Custom,
            ]
        );
        assert_eq!(options[1].label, "This Week");
        assert_eq!(options[6].label, "Custom");
    }

    #[test]
    fn test_write_value_truncates_and_matches_preset() {
        let mut picker = picker();
        let value = [datetime(2024, 3, 10, 9, 30, 0), datetime(2024, 3, 16, 18, 0, 0)];
        picker.write_value(Some(&value[..]));
        assert_eq!(picker.value(), range((2024, 3, 10), (2024, 3, 16)));
        assert_eq!(picker.selected(), Preset::ThisWeek);
    }

    #[test]
    fn test_write_value_malformed_falls_back_to_today() {
        let mut picker = picker();
        picker.write_value(Some(&[date(2024, 1, 1), date(2024, 1, 31)][..]));
        assert_eq!(picker.selected(), Preset::Custom);

        picker.write_value::<NaiveDate>(None);
        assert_eq!(picker.value(), DateRange::single(date(2024, 3, 13)));
        assert_eq!(picker.selected(), Preset::Today);

        picker.write_value(Some(&[date(2024, 1, 1), date(2024, 1, 31)][..]));
        picker.write_value(Some(&[date(2024, 1, 1)][..]));
        assert_eq!(picker.value(), DateRange::single(date(2024, 3, 13)));

        picker.write_value(Some(&[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)][..]));
        assert_eq!(picker.value(), DateRange::single(date(2024, 3, 13)));
    }

    #[test]
    fn test_write_value_reorders_reversed_pair() {
        let mut picker = picker();
        picker.write_value(Some(&[date(2024, 3, 14), date(2024, 3, 10)][..]));
        assert_eq!(picker.value(), range((2024, 3, 10), (2024, 3, 14)));
    }

    #[test]
    fn test_select_preset() {
        let mut picker = picker();
        assert_eq!(
            picker.select_preset(Preset::PrevMonth),
            Selection::Applied(range((2024, 2, 1), (2024, 2, 29)))
        );
        assert_eq!(picker.selected(), Preset::PrevMonth);
        assert_eq!(picker.formatted(), "February 2024");

        assert_eq!(picker.select_preset(Preset::ThisYear), Selection::Applied(range((2024, 1, 1), (2024, 12, 31))));
        assert_eq!(picker.formatted(), "2024");
    }

    #[test]
    fn test_select_custom_opens_calendar_with_current_value() {
        let mut picker = picker();
        picker.select_preset(Preset::ThisWeek);

        assert_eq!(picker.select_preset(Preset::Custom), Selection::CalendarOpened);
        assert_eq!(picker.value(), range((2024, 3, 10), (2024, 3, 16)));
        assert_eq!(
            picker.calendar_selection(),
            Some(&[date(2024, 3, 10), date(2024, 3, 16)][..])
        );
    }

    #[test]
    fn test_apply_calendar_range() {
        let mut picker = picker();
        picker.open_calendar();
        picker.set_calendar_selection([date(2024, 3, 5), date(2024, 3, 8)]);

        assert_eq!(picker.apply_calendar(), Some(range((2024, 3, 5), (2024, 3, 8))));
        assert_eq!(picker.selected(), Preset::Custom);
        assert_eq!(picker.granularity(), Granularity::Custom);
        assert_eq!(picker.formatted(), "3/5/2024 - 3/8/2024");
        assert_eq!(picker.calendar_selection(), None);
    }

    #[test]
    fn test_apply_calendar_single_day_uses_start_as_end() {
        let mut picker = picker();
        picker.set_calendar_selection([datetime(2024, 3, 1, 12, 0, 0)]);
        assert_eq!(picker.apply_calendar(), Some(DateRange::single(date(2024, 3, 1))));
        assert_eq!(picker.granularity(), Granularity::Daily);
    }

    #[test]
    fn test_apply_calendar_matching_a_preset_selects_it() {
        let mut picker = picker();
        picker.set_calendar_selection([date(2024, 3, 1), date(2024, 3, 31)]);
        picker.apply_calendar();
        assert_eq!(picker.selected(), Preset::ThisMonth);
    }

    #[test]
    fn test_apply_or_cancel_without_selection() {
        let mut picker = picker();
        let before = picker.value();

        assert_eq!(picker.apply_calendar(), None);

        picker.set_calendar_selection(Vec::<NaiveDate>::new());
        assert_eq!(picker.apply_calendar(), None);

        picker.set_calendar_selection([date(2020, 1, 1), date(2020, 1, 2)]);
        picker.cancel_calendar();
        assert_eq!(picker.apply_calendar(), None);
        assert_eq!(picker.value(), before);
    }

    #[test]
    fn test_stepping_keeps_granularity_and_rematches_presets() {
        let mut picker = picker();
        picker.select_preset(Preset::ThisMonth);

        assert_eq!(picker.step_backward(), Some(range((2024, 2, 1), (2024, 2, 29))));
        assert_eq!(picker.selected(), Preset::PrevMonth);

        assert_eq!(picker.step_backward(), Some(range((2024, 1, 1), (2024, 1, 31))));
        assert_eq!(picker.selected(), Preset::Custom);
        assert_eq!(picker.granularity(), Granularity::Monthly);

        picker.step_forward();
        picker.step_forward();
        assert_eq!(picker.value(), range((2024, 3, 1), (2024, 3, 31)));
        assert_eq!(picker.selected(), Preset::ThisMonth);
    }

    #[test]
    fn test_stepping_weeks_moves_by_seven_days() {
        let mut picker = picker();
        picker.select_preset(Preset::ThisWeek);
        assert_eq!(picker.step_backward(), Some(range((2024, 3, 3), (2024, 3, 9))));
        assert_eq!(picker.selected(), Preset::PrevWeek);
    }

    #[test]
    fn test_stepping_days() {
        let mut picker = picker();
        assert_eq!(picker.step_forward(), Some(DateRange::single(date(2024, 3, 14))));
        assert_eq!(picker.selected(), Preset::Custom);
        assert_eq!(picker.step_backward(), Some(DateRange::single(date(2024, 3, 13))));
        assert_eq!(picker.selected(), Preset::Today);
    }

    #[test]
    fn test_step_past_calendar_end_keeps_value() {
        let mut picker = picker();
        picker.write_value(Some(&[NaiveDate::MAX, NaiveDate::MAX][..]));
        assert_eq!(picker.step_forward(), None);
        assert_eq!(picker.value(), DateRange::single(NaiveDate::MAX));
    }

    #[test]
    fn test_disabled_ignores_user_actions() {
        let mut picker = picker();
        picker.set_disabled(true);
        assert!(picker.is_disabled());

        let before = picker.value();
        assert_eq!(picker.select_preset(Preset::ThisYear), Selection::Ignored);
        assert_eq!(picker.step_forward(), None);
        picker.set_calendar_selection([date(2024, 1, 1), date(2024, 1, 5)]);
        assert_eq!(picker.apply_calendar(), None);
        assert_eq!(picker.value(), before);

        // Form writes still apply
        picker.write_value(Some(&[date(2024, 1, 1), date(2024, 12, 31)][..]));
        assert_eq!(picker.selected(), Preset::ThisYear);

        picker.set_disabled(false);
        assert_eq!(picker.step_forward(), Some(range((2025, 1, 1), (2025, 12, 31))));
    }

    #[test]
    fn test_default_picker_uses_system_clock() {
        let before = chrono::Local::now().date_naive();
        let picker = SoftRangePicker::default();
        let after = chrono::Local::now().date_naive();

        let value = picker.value();
        assert_eq!(picker.granularity(), Granularity::Daily);
        assert!(before <= value.start() && value.end() <= after, "{value}");
        // Only a run that crosses midnight can re-match against the next day
        if before == after {
            assert_eq!(picker.selected(), Preset::Today);
        }
    }
}
