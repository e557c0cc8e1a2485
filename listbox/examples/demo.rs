//! Interactive list box demo.
//!
//! A background task appends a line every half second to a list capped at
//! 200 items. Click or use the arrow keys to move, Enter to confirm, Tab to
//! toggle focus, `q` or Esc to quit. Logs go to `listbox.log`.

use std::fs::File;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use listbox::{DispatchMode, ListBox, ListBoxConfig, SelectKind, Size};
use simplelog::{Config, LevelFilter, WriteLogger};
use termgrid::{Canvas, DefaultTheme, Event, Key, Rgb, Terminal};
use tokio::sync::mpsc;

const FEED_INTERVAL: Duration = Duration::from_millis(500);
const FRAME: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() {
    let log_file = File::create("listbox.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

async fn run() -> std::io::Result<()> {
    let config = ListBoxConfig::new()
        .width(Size::Fixed(40))
        .height(Size::Fixed(12))
        .max_items(200)
        .dispatch(DispatchMode::Ordered);
    let mut list = ListBox::from_config(&config).expect("demo config is valid");
    list.set_pos(2, 2);
    list.set_active(true);
    for name in ["alpha", "bravo", "charlie", "delta", "echo"] {
        list.add_item(name);
    }

    let status = Arc::new(Mutex::new(String::from("nothing selected yet")));
    let status_cb = Arc::clone(&status);
    list.on_select(move |event| {
        let verb = match event.kind {
            SelectKind::Changed => "picked",
            SelectKind::Confirmed => "confirmed",
        };
        log::info!("{} #{} {}", verb, event.index, event.text);
        if let Ok(mut status) = status_cb.lock() {
            *status = format!("{} #{}: {}", verb, event.index, event.text);
        }
    });

    let (feed_tx, mut feed_rx) = mpsc::unbounded_channel::<String>();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(FEED_INTERVAL);
        let mut n = 0u32;
        loop {
            interval.tick().await;
            n += 1;
            if feed_tx.send(format!("line {n}")).is_err() {
                break;
            }
        }
    });

    let theme = DefaultTheme::new();
    let mut term = Terminal::new()?;

    loop {
        while let Ok(line) = feed_rx.try_recv() {
            list.add_item(line);
        }

        let footer = status
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default();
        term.draw(|buf| {
            buf.put_text(2, 0, "listbox demo  (q quits)", Rgb::WHITE, Rgb::BLACK);
            list.paint(buf, &theme);
            let y = list.rect().bottom() + 1;
            buf.put_text(2, y, &footer, Rgb::WHITE, Rgb::BLACK);
        })?;

        for event in term.poll(Some(FRAME))? {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Key { key: Key::Tab, .. } => {
                    let active = list.is_active();
                    list.set_active(!active);
                }
                other => {
                    list.process_event(&other);
                }
            }
        }

        tokio::task::yield_now().await;
    }
}
