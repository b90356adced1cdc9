//! Interactive playground for the time wheel.
//!
//! Holds a committed value, drives a [`TimeWheel`] from line commands on
//! stdin and prints the trigger and the visible part of every wheel.
use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use parking_lot::{Mutex, RwLock};
use timewheel::{
    Candidate, Dimension, HourCycle, SharedScroller, TimeFormat, TimeWheel, TimeWheelArgs,
    WheelScroller,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Nanoseconds per simulated frame.
const FRAME_NANOS: u64 = 16_000_000;
const SCROLL_SMOOTHING: f32 = 0.6;
const DEFAULT_FILTER: &str = "error,timewheel=info,playground=info";

#[derive(Parser)]
#[command(name = "playground")]
#[command(version, about = "Drive a time wheel from the terminal", long_about = None)]
struct Cli {
    /// Hour cycle, `12h` or `24h`
    #[arg(short = 't', long, default_value = "24h")]
    time_type: HourCycle,
    /// Time format, `HH:mm` or `HH:mm:ss`
    #[arg(short, long, default_value = "HH:mm")]
    format: TimeFormat,
    /// Initial committed value
    #[arg(short, long, default_value = "12:00")]
    value: String,
    /// Visible height of each wheel, in pixels
    #[arg(long, default_value_t = 128.0, value_parser = parse_extent)]
    viewport: f32,
    /// Re-center wheels after every pick
    #[arg(long)]
    recenter: bool,
    /// Start disabled
    #[arg(long)]
    disabled: bool,
}

fn parse_extent(s: &str) -> Result<f32, String> {
    let extent: f32 = s.parse().map_err(|err| format!("`{s}` is not a number: {err}"))?;
    if extent.is_finite() && extent > 0.0 {
        Ok(extent)
    } else {
        Err(format!("`{s}` is not a positive finite extent"))
    }
}

enum Command {
    Open,
    Dismiss,
    Pick(Candidate),
    Now,
    Confirm,
    Set(String),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Command::Show);
    };
    let command = match head {
        "open" => Command::Open,
        "close" | "dismiss" => Command::Dismiss,
        "now" => Command::Now,
        "confirm" | "ok" => Command::Confirm,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "pick" => {
            let dimension: Dimension = words
                .next()
                .context("usage: pick <hour|minute|second|period> <value>")?
                .parse()?;
            let label = words.next().context("missing value to pick")?;
            let candidate = Candidate::parse(dimension, label)
                .with_context(|| format!("`{label}` is not a {dimension} value"))?;
            Command::Pick(candidate)
        }
        "set" => {
            let rest = line.trim_start()["set".len()..].trim();
            Command::Set(rest.to_string())
        }
        other => bail!("unknown command `{other}`, try `help`"),
    };
    Ok(command)
}

struct Playground {
    picker: TimeWheel,
    value: Arc<Mutex<String>>,
    scrollers: HashMap<Dimension, SharedScroller>,
    frame: u64,
}

impl Playground {
    fn new(cli: Cli) -> Self {
        let value = Arc::new(Mutex::new(cli.value.clone()));
        let sink = Arc::clone(&value);
        let args = TimeWheelArgs::default()
            .hour_cycle(cli.time_type)
            .format(cli.format)
            .disabled(cli.disabled)
            .recenter_on_select(cli.recenter)
            .on_change(move |text| {
                info!(%text, "value changed");
                *sink.lock() = text;
            });
        let item_extent = args.item_extent;
        let mut picker = TimeWheel::new(cli.value, args);

        let mut scrollers = HashMap::new();
        for wheel in picker.wheels() {
            let scroller: SharedScroller = Arc::new(RwLock::new(WheelScroller::for_items(
                wheel.items.len(),
                item_extent,
                cli.viewport,
            )));
            picker.attach_surface(wheel.dimension, scroller.clone());
            scrollers.insert(wheel.dimension, scroller);
        }

        Self {
            picker,
            value,
            scrollers,
            frame: 0,
        }
    }

    /// Returns false when the session should end.
    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Open => self.picker.open(),
            Command::Dismiss => self.picker.dismiss(),
            Command::Pick(candidate) => self.picker.select(candidate),
            Command::Now => self.picker.set_now(),
            Command::Confirm => self.picker.confirm(),
            Command::Set(text) => *self.value.lock() = text,
            Command::Show => {}
            Command::Help => {
                print_help();
                return true;
            }
            Command::Quit => return false,
        }
        // the host owns the value; hand every change back like a re-render would
        let value = self.value.lock().clone();
        if value != self.picker.display_text() {
            self.picker.set_value(value);
        }
        self.settle_scrollers();
        true
    }

    fn settle_scrollers(&mut self) {
        for scroller in self.scrollers.values() {
            let mut scroller = scroller.write();
            while !scroller.is_settled() {
                self.frame += 1;
                scroller.update(self.frame * FRAME_NANOS, SCROLL_SMOOTHING);
            }
        }
        debug!(frames = self.frame, "scrollers settled");
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let text = self.picker.display_text();
        let shown = if text.is_empty() {
            format!("({})", self.picker.placeholder())
        } else {
            text.to_string()
        };
        let state = if self.picker.is_disabled() {
            " disabled"
        } else {
            ""
        };
        writeln!(out, "[ {shown:<14} ] clock{state}")?;
        if !self.picker.is_open() {
            return Ok(());
        }

        let item_extent = self.picker.args().item_extent;
        for wheel in self.picker.wheels() {
            let (first, count) = match self.scrollers.get(&wheel.dimension) {
                Some(scroller) => {
                    let scroller = scroller.read();
                    let first = (scroller.position() / item_extent).round() as usize;
                    let count = (scroller.viewport_extent() / item_extent).floor() as usize;
                    (first, count.max(1))
                }
                None => (0, wheel.items.len()),
            };
            let cells: Vec<String> = wheel
                .items
                .iter()
                .skip(first)
                .take(count)
                .map(|item| {
                    if item.selected {
                        format!("[{}]", item.label)
                    } else {
                        format!(" {} ", item.label)
                    }
                })
                .collect();
            writeln!(out, "  {:<7}|{}", wheel.dimension, cells.join(""))?;
        }
        writeln!(out, "  draft  | {}", self.picker.state().draft_text())?;
        Ok(())
    }
}

fn print_help() {
    println!("commands:");
    println!("  open                      open the wheels");
    println!("  pick <dimension> <value>  pick an entry, e.g. `pick minute 45`");
    println!("  now                       pick the current time");
    println!("  confirm                   emit the draft and close");
    println!("  dismiss                   close without emitting");
    println!("  set <text>                change the committed value from outside");
    println!("  show | help | quit");
}

fn init_tracing() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut playground = Playground::new(cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    playground.render(&mut out)?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                continue;
            }
        };
        if !playground.handle(command) {
            break;
        }
        playground.render(&mut out)?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playground(args: &[&str]) -> Playground {
        let cli = Cli::parse_from(std::iter::once("playground").chain(args.iter().copied()));
        Playground::new(cli)
    }

    fn rendered(playground: &Playground) -> String {
        let mut out = Vec::new();
        playground
            .render(&mut out)
            .map(|()| String::from_utf8_lossy(&out).into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn test_parse_commands() {
        assert!(matches!(
            parse_command("pick minute 45"),
            Ok(Command::Pick(Candidate::Minute(45)))
        ));
        assert!(matches!(
            parse_command("set  07:30 PM "),
            Ok(Command::Set(text)) if text == "07:30 PM"
        ));
        assert!(matches!(parse_command(""), Ok(Command::Show)));
        assert!(parse_command("pick day 3").is_err());
        assert!(parse_command("pick hour xx").is_err());
        assert!(parse_command("jump").is_err());
    }

    #[test]
    fn test_viewport_must_be_positive_and_finite() {
        let parse = |viewport: &str| {
            Cli::try_parse_from(["playground", "--viewport", viewport]).map(|cli| cli.viewport)
        };
        assert_eq!(parse("96").ok(), Some(96.0));
        assert!(parse("NaN").is_err());
        assert!(parse("inf").is_err());
        assert!(parse("0").is_err());
        assert!(parse("-32").is_err());
        assert!(parse("tall").is_err());
    }

    #[test]
    fn test_pick_updates_host_value() {
        let mut playground = playground(&["--value", "14:30"]);
        assert!(playground.handle(Command::Open));
        assert!(playground.handle(Command::Pick(Candidate::Minute(45))));
        assert_eq!(*playground.value.lock(), "14:45");
        assert_eq!(playground.picker.display_text(), "14:45");
        assert!(!playground.handle(Command::Quit));
    }

    #[test]
    fn test_open_scrolls_and_renders_selection() {
        let mut playground = playground(&["-t", "12h", "-f", "HH:mm:ss", "-v", "02:15:09 PM"]);
        playground.handle(Command::Open);
        let screen = rendered(&playground);
        assert!(screen.contains("[02]"));
        assert!(screen.contains("[15]"));
        assert!(screen.contains("[09]"));
        assert!(screen.contains("[PM]"));
        assert!(screen.contains("draft  | 02:15:09 PM"));
    }

    #[test]
    fn test_closed_shows_placeholder() {
        let playground = playground(&["--value", ""]);
        assert!(rendered(&playground).contains("(Select Time)"));
    }
}
