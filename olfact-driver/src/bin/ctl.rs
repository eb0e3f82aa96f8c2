//! Interactive control console for the olfactory display.
//!
//! Operator-facing front end for the driver: open or close the serial
//! connection, set per-channel emission strength, and choose which
//! channels emit. Commands are read line by line from stdin; the port is
//! closed again on the way out.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use olfact_driver::config::Config;
use olfact_driver::ports::list_available_ports;
use olfact_driver::tracing::{self, prelude::*};
use olfact_driver::{Channel, ScentDriver};

const HELP: &str = "\
Commands:
  ports                list serial ports
  open <port> [baud]   open the controller port
  close                close the controller port
  level <1|2> <value>  set emission strength for a channel (1-10)
  ch1 | ch2 | both | none
                       choose which channels emit
  status               show connection and channel state
  quit                 close the port and exit";

fn main() -> Result<()> {
    tracing::init_journald_or_stdout();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load_from(Path::new(&path))?,
        None => Config::load()?,
    };

    let mut driver = ScentDriver::new();
    if let Some(port) = config.device.port.as_deref() {
        if let Err(e) = driver.open(port, config.device.baud_rate) {
            warn!("{e}");
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("ports") => match list_available_ports() {
                Ok(ports) if ports.is_empty() => println!("no serial ports found"),
                Ok(ports) => ports.iter().for_each(|p| println!("{p}")),
                Err(e) => warn!("{e}"),
            },
            Some("open") => match words.next() {
                Some(port) => {
                    let baud_rate = match words.next() {
                        Some(raw) => match raw.parse() {
                            Ok(baud_rate) => baud_rate,
                            Err(_) => {
                                println!("invalid baud rate: {raw}");
                                continue;
                            }
                        },
                        None => config.device.baud_rate,
                    };
                    if let Err(e) = driver.open(port, baud_rate) {
                        warn!("{e}");
                    }
                }
                None => println!("usage: open <port> [baud]"),
            },
            Some("close") => driver.close(),
            Some("level") => {
                let (Some(channel), Some(value)) = (words.next(), words.next()) else {
                    println!("usage: level <1|2> <value>");
                    continue;
                };
                let channel = match channel {
                    "1" => Channel::One,
                    "2" => Channel::Two,
                    other => {
                        println!("no such channel: {other}");
                        continue;
                    }
                };
                match value.parse::<f32>() {
                    Ok(level) => driver.set_intensity(channel, level),
                    Err(_) => println!("invalid level: {value}"),
                }
            }
            Some("ch1") => select(&mut driver, true, false),
            Some("ch2") => select(&mut driver, false, true),
            Some("both") => select(&mut driver, true, true),
            Some("none") => select(&mut driver, false, false),
            Some("status") => print_status(&driver),
            Some("help") => println!("{HELP}"),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other} (try 'help')"),
        }
    }

    driver.close();
    info!("Exiting.");
    Ok(())
}

// Selection failures are already logged by the driver; fire-and-forget.
fn select(driver: &mut ScentDriver, channel1: bool, channel2: bool) {
    let _ = driver.select_channels(channel1, channel2);
}

fn print_status(driver: &ScentDriver) {
    println!("port: {}", if driver.is_open() { "open" } else { "closed" });
    let (ch1, ch2) = driver.selection().unwrap_or((false, false));
    for (channel, enabled) in [(Channel::One, ch1), (Channel::Two, ch2)] {
        println!(
            "{channel}: {} (emission {})",
            if enabled { "on" } else { "off" },
            driver.intensity(channel),
        );
    }
}
