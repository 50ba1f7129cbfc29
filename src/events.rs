use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;

// Reads key presses from the terminal
pub struct EventHandler {
    event_stream: EventStream,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            event_stream: EventStream::new(),
        }
    }

    /// Waits for the next terminal event. Key releases and repeats are dropped.
    pub async fn next(&mut self) -> anyhow::Result<InputEvent> {
        match self.event_stream.next().await {
            Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                Ok(InputEvent::Key(key_event))
            }
            Some(Ok(_)) => Ok(InputEvent::None),
            Some(Err(e)) => Err(anyhow::anyhow!("Error reading event: {}", e)),
            None => Ok(InputEvent::Closed),
        }
    }
}

#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Closed,
    None,
}
