use std::sync::Arc;

use parking_lot::Mutex;
use timewheel::{
    Candidate, DayPeriod, FixedClock, FormatConfig, HourCycle, SystemClock, TimeFormat,
    TimeValue, TimeWheel, TimeWheelArgs,
};

/// Mirrors a host that stores every change back into its own value.
struct Host {
    value: Arc<Mutex<String>>,
    changes: Arc<Mutex<Vec<String>>>,
}

impl Host {
    fn new(initial: &str) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial.to_string())),
            changes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn args(&self, args: TimeWheelArgs) -> TimeWheelArgs {
        let value = Arc::clone(&self.value);
        let changes = Arc::clone(&self.changes);
        args.on_change(move |text| {
            changes.lock().push(text.clone());
            *value.lock() = text;
        })
    }

    fn sync(&self, picker: &mut TimeWheel) {
        picker.set_value(self.value.lock().clone());
    }
}

#[test]
fn scenario_a_minute_pick_in_24_hour() {
    let host = Host::new("14:30");
    let args = host.args(
        TimeWheelArgs::default()
            .hour_cycle(HourCycle::H24)
            .format(TimeFormat::HourMinute),
    );
    let mut picker = TimeWheel::new(host.value.lock().clone(), args);

    picker.open();
    assert_eq!(picker.state().draft(), TimeValue::new(14, 30, 0, None));

    picker.select(Candidate::Minute(45));
    assert_eq!(*host.changes.lock(), vec!["14:45".to_string()]);
    host.sync(&mut picker);
    assert_eq!(picker.display_text(), "14:45");
    assert_eq!(picker.state().draft(), TimeValue::new(14, 45, 0, None));
}

#[test]
fn scenario_b_now_in_12_hour_with_seconds() {
    let host = Host::new("02:15:09 PM");
    let args = host.args(
        TimeWheelArgs::default()
            .hour_cycle(HourCycle::H12)
            .format(TimeFormat::HourMinuteSecond)
            .clock(FixedClock::at(9, 5, 0)),
    );
    let mut picker = TimeWheel::new(host.value.lock().clone(), args);

    picker.open();
    assert_eq!(
        picker.state().draft(),
        TimeValue::new(2, 15, 9, Some(DayPeriod::Pm))
    );

    picker.set_now();
    assert_eq!(*host.changes.lock(), vec!["09:05:00 AM".to_string()]);
}

#[test]
fn scenario_c_empty_value_reads_wall_clock() {
    let config = FormatConfig::new(HourCycle::H24, TimeFormat::HourMinute);
    let clock = FixedClock::at(16, 42, 7);
    let value = TimeValue::parse("", config, &clock);
    assert_eq!(value, TimeValue::new(16, 42, 7, None));
    assert_ne!(value.format(config), "00:00");

    let picker = TimeWheel::new(
        "",
        TimeWheelArgs::default().clock(FixedClock::at(16, 42, 7)),
    );
    assert_eq!(picker.state().draft_text(), "16:42");
}

#[test]
fn empty_value_with_system_clock_is_valid() {
    let config = FormatConfig::new(HourCycle::H12, TimeFormat::HourMinuteSecond);
    let value = TimeValue::parse("", config, &SystemClock);
    assert!(value.is_valid(config));
}

#[test]
fn confirm_emits_exactly_the_draft_and_closes() {
    let host = Host::new("08:00");
    let args = host.args(TimeWheelArgs::default().clock(FixedClock::default()));
    let mut picker = TimeWheel::new(host.value.lock().clone(), args);

    picker.open();
    picker.select(Candidate::Hour(21));
    host.sync(&mut picker);
    picker.select(Candidate::Minute(5));
    host.sync(&mut picker);
    picker.confirm();

    assert!(!picker.is_open());
    assert_eq!(
        *host.changes.lock(),
        vec!["21:00".to_string(), "21:05".to_string(), "21:05".to_string()]
    );
}

#[test]
fn dismiss_emits_nothing_and_next_open_is_fresh() {
    let host = Host::new("08:00");
    let mut picker = TimeWheel::new("08:00", host.args(TimeWheelArgs::default()));

    picker.open();
    picker.dismiss();
    assert!(!picker.is_open());
    assert!(host.changes.lock().is_empty());

    picker.set_value("10:10");
    picker.open();
    assert_eq!(picker.state().draft(), TimeValue::new(10, 10, 0, None));
}

#[test]
fn selection_order_does_not_matter() {
    let run = |picks: &[Candidate]| {
        let args = TimeWheelArgs::default().hour_cycle(HourCycle::H12);
        let mut picker = TimeWheel::new("02:15 PM", args);
        picker.open();
        for &pick in picks {
            picker.select(pick);
        }
        picker.state().draft()
    };
    let hour = Candidate::Hour(11);
    let minute = Candidate::Minute(59);
    let period = Candidate::Period(DayPeriod::Am);
    assert_eq!(run(&[minute, hour, period]), run(&[period, hour, minute]));
    assert_eq!(
        run(&[hour, minute]),
        TimeValue::new(11, 59, 0, Some(DayPeriod::Pm))
    );
}

#[test]
fn garbage_value_falls_back_to_canonical_default() {
    let picker = TimeWheel::new(
        "garbage",
        TimeWheelArgs::default()
            .hour_cycle(HourCycle::H12)
            .clock(FixedClock::at(18, 30, 0)),
    );
    assert_eq!(picker.state().draft_text(), "12:00 AM");
}
