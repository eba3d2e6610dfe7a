use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, RecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

/// Events delivered to the main loop, one at a time.
pub enum AppEvent {
    Key(KeyEvent),
    /// One shake step elapsed. Emitted at a fixed cadence whether or not a
    /// shake is in flight; the controller ignores ticks while idle.
    Tick,
    Resize(u16, u16),
}

/// Bridges crossterm input and a fixed-rate tick into one channel.
///
/// A background thread polls the terminal with the remaining time until the
/// next tick as the deadline, so input latency stays below one tick and the
/// tick cadence does not drift while keys are held down.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut next_tick = Instant::now() + tick_rate;
            loop {
                let timeout = next_tick.saturating_duration_since(Instant::now());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(cols, rows)) => {
                                tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                warn!(error = %err, "terminal event read failed");
                                return;
                            }
                        };
                        if forwarded.is_err() {
                            return;
                        }
                    }
                    Ok(false) => {
                        if tx.send(AppEvent::Tick).is_err() {
                            return;
                        }
                        next_tick = Instant::now() + tick_rate;
                    }
                    Err(err) => {
                        warn!(error = %err, "terminal event poll failed");
                        return;
                    }
                }
            }
        });

        Self { rx }
    }

    /// Block until the next event. `Err` means the reader thread is gone.
    pub fn next(&self) -> Result<AppEvent, RecvError> {
        self.rx.recv()
    }
}
