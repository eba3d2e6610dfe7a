use crate::otp::SHAKE_STEP_MS;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Result;
use std::time::Duration;

/// Run the demo until quit.
///
/// The tick rate equals the shake step interval, so one tick advances the
/// timeline exactly one held position.
pub fn run(expected: String, spacing: u16) -> Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(Duration::from_millis(SHAKE_STEP_MS));
    let mut app = App::new(expected, spacing);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next() {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks the new size up from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(_) => break,
        }
    }

    drop(guard);
    Ok(())
}
