use crate::domain::HookPreference;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Completion,
    CompletionSound,
    Stop,
    StopSound,
}

struct Row {
    kind: RowKind,
    label: &'static str,
    selected: bool,
}

/// Ask the user which notifications to install. Arrow keys move, space
/// toggles, enter confirms. Returns None when the user cancels.
pub fn run_picker(supports_sound: bool) -> Result<Option<HookPreference>> {
    let mut rows = vec![
        Row {
            kind: RowKind::Completion,
            label: "Notify when a task completes",
            selected: true,
        },
        Row {
            kind: RowKind::Stop,
            label: "Notify when a session stops",
            selected: true,
        },
    ];
    if supports_sound {
        rows.insert(
            1,
            Row {
                kind: RowKind::CompletionSound,
                label: "  play a sound on completion",
                selected: false,
            },
        );
        rows.push(Row {
            kind: RowKind::StopSound,
            label: "  play a sound on stop",
            selected: false,
        });
    }

    println!("Select the notifications to install:");
    println!("(arrows move, space toggles, enter confirms, q cancels)");
    println!();

    enable_raw_mode()?;
    let result = run_loop(&mut rows);
    disable_raw_mode()?;
    println!();
    result
}

fn run_loop(rows: &mut [Row]) -> Result<Option<HookPreference>> {
    let mut stdout = io::stdout();
    let mut selected_row = 0usize;
    draw(&mut stdout, rows, selected_row, false)?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Up => {
                    if selected_row > 0 {
                        selected_row -= 1;
                    }
                }
                KeyCode::Down => {
                    if selected_row + 1 < rows.len() {
                        selected_row += 1;
                    }
                }
                KeyCode::Char(' ') => rows[selected_row].selected = !rows[selected_row].selected,
                KeyCode::Enter => return Ok(Some(preference_from(rows))),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                _ => {}
            }
            draw(&mut stdout, rows, selected_row, true)?;
        }
    }
}

fn draw(stdout: &mut impl Write, rows: &[Row], selected_row: usize, redraw: bool) -> Result<()> {
    if redraw {
        execute!(
            stdout,
            cursor::MoveUp(rows.len() as u16),
            Clear(ClearType::FromCursorDown)
        )?;
    }
    for (index, row) in rows.iter().enumerate() {
        let pointer = if index == selected_row { ">" } else { " " };
        let mark = if row.selected { "x" } else { " " };
        // raw mode needs the explicit carriage return
        write!(stdout, "{} [{}] {}\r\n", pointer, mark, row.label)?;
    }
    stdout.flush()?;
    Ok(())
}

fn preference_from(rows: &[Row]) -> HookPreference {
    let is_on = |kind: RowKind| rows.iter().any(|row| row.kind == kind && row.selected);
    let preference = HookPreference {
        on_completion: is_on(RowKind::Completion),
        completion_sound: is_on(RowKind::CompletionSound),
        on_stop: is_on(RowKind::Stop),
        stop_sound: is_on(RowKind::StopSound),
    };
    HookPreference {
        // a sound toggle without its event does nothing
        completion_sound: preference.on_completion && preference.completion_sound,
        stop_sound: preference.on_stop && preference.stop_sound,
        ..preference
    }
}
