use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, KeyAction, SelectState, ViewportState};
use cmake_pilot_core::error::Result;

struct RawModeGuard;

impl RawModeGuard {
    /// Switches to the alternate screen and raw mode.
    ///
    /// The guard exists as soon as the alternate screen is entered, so a
    /// failure to enable raw mode still leaves it again.
    fn enter() -> Result<Self> {
        stdout().execute(EnterAlternateScreen)?;
        let guard = RawModeGuard;
        enable_raw_mode()?;
        stdout().execute(cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal on every exit path
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Shows `labels` as a full-screen list and waits for the user to pick one.
///
/// Returns the position of the chosen label, or `None` if the user cancelled
/// or there was nothing to choose from.
pub fn prompt_for_choice(prompt: &str, labels: &[String]) -> Result<Option<usize>> {
    if labels.is_empty() {
        return Ok(None);
    }

    // When this goes out of scope, raw mode is disabled
    let _raw_mode_guard = RawModeGuard::enter()?;
    let mut stdout = stdout();

    let (width, height) = terminal::size()?;
    let mut state = SelectState::new(width, height);
    let mut indexes_to_display = filter_displayed_indexes(labels, &state.filter_text);
    redraw_ui(prompt, &state, labels, &indexes_to_display)?;

    loop {
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let new_state = match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match handle_key_event(key_event, &state, &indexes_to_display) {
                    KeyAction::Choose(index) => {
                        debug!("Selected `{}`", labels[index]);
                        return Ok(Some(index));
                    }
                    KeyAction::Cancel => return Ok(None),
                    KeyAction::Move(direction) => Some(move_selected_index(
                        &state,
                        indexes_to_display.len(),
                        direction,
                    )),
                    KeyAction::Update(updated_state) => Some(updated_state),
                    KeyAction::Bell => {
                        execute!(stdout, Print("\x07"))?;
                        None
                    }
                    KeyAction::Ignore => None,
                }
            }
            Event::Resize(width, height) => Some(handle_resize(
                width,
                height,
                &state,
                indexes_to_display.len(),
            )),
            _ => None,
        };

        if let Some(new_state) = new_state {
            if new_state != state {
                state = new_state;
                indexes_to_display = filter_displayed_indexes(labels, &state.filter_text);
                redraw_ui(prompt, &state, labels, &indexes_to_display)?;
            }
        }
    }
}

fn redraw_ui(
    prompt: &str,
    state: &SelectState,
    labels: &[String],
    indexes_to_display: &[usize],
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(prompt, state, indexes_to_display.len())?;

    if indexes_to_display.is_empty() {
        queue!(
            stdout,
            MoveTo(0, 1),
            SetForegroundColor(Color::Red),
            Print("No matching choices!"),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        print_choices_with_selection(state, labels, indexes_to_display)?;
    }

    if state.is_filtering {
        queue!(
            stdout,
            MoveTo(0, state.viewport.height + 1),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

fn print_header(prompt: &str, state: &SelectState, display_count: usize) -> Result<()> {
    let mut stdout = stdout();

    let instructions = if state.is_filtering {
        "<esc>: Stop Filtering".to_string()
    } else {
        format!(
            "/: Filter   |   {}/{}   |   q: Cancel",
            (state.selected_index + 1).min(display_count),
            display_count
        )
    };

    let header = format!("  {prompt}   {instructions}");
    let header = fit_to_width(&header, state.viewport.width as usize);

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        SetAttribute(Attribute::Bold),
        Print(header),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

fn print_choices_with_selection(
    state: &SelectState,
    labels: &[String],
    indexes_to_display: &[usize],
) -> Result<()> {
    let mut stdout = stdout();
    let viewport = &state.viewport;

    let visible = indexes_to_display
        .iter()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (row, index) in visible.enumerate() {
        let is_selected = row + viewport.offset == state.selected_index;
        let marker = if is_selected { '>' } else { ' ' };
        let content = fit_to_width(
            &format!("{marker} {}", labels[*index]),
            viewport.width as usize,
        );

        queue!(stdout, MoveTo(0, row as u16 + 1))?;

        if is_selected {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(DarkBlue),
                SetForegroundColor(Yellow),
            )?;
        }

        queue!(
            stdout,
            Print(content),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset),
        )?;
    }

    Ok(())
}

/// Truncates or pads `text` to exactly `width` characters.
fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let length = fitted.chars().count();
    fitted.push_str(&" ".repeat(width - length));
    fitted
}

/// Map a key press onto what the list should do
fn handle_key_event(
    key_event: KeyEvent,
    state: &SelectState,
    indexes_to_display: &[usize],
) -> KeyAction {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Cancel
        }
        KeyCode::Up => KeyAction::Move(Up),
        KeyCode::Down => KeyAction::Move(Down),
        KeyCode::Enter => match indexes_to_display.get(state.selected_index) {
            Some(index) => KeyAction::Choose(*index),
            None => KeyAction::Bell,
        },
        KeyCode::Backspace if state.is_filtering => {
            if state.filter_text.is_empty() {
                return KeyAction::Ignore;
            }
            let mut filter_text = state.filter_text.clone();
            filter_text.pop();
            KeyAction::Update(with_filter(state, true, filter_text))
        }
        KeyCode::Esc if state.is_filtering => {
            KeyAction::Update(with_filter(state, false, String::new()))
        }
        KeyCode::Char(c) if state.is_filtering => {
            let mut filter_text = state.filter_text.clone();
            filter_text.push(c);
            KeyAction::Update(with_filter(state, true, filter_text))
        }
        KeyCode::Char('/') => {
            let mut updated_state = state.clone();
            updated_state.is_filtering = true;
            KeyAction::Update(updated_state)
        }
        KeyCode::Char('k') => KeyAction::Move(Up),
        KeyCode::Char('j') => KeyAction::Move(Down),
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::Ignore,
    }
}

/// A changed filter changes the rows, so the selection starts over
fn with_filter(state: &SelectState, is_filtering: bool, filter_text: String) -> SelectState {
    let mut updated_state = state.clone();
    updated_state.is_filtering = is_filtering;
    updated_state.filter_text = filter_text;
    updated_state.selected_index = 0;
    updated_state.viewport.offset = 0;
    updated_state
}

/// Handle window resize events
fn handle_resize(
    width: u16,
    height: u16,
    state: &SelectState,
    display_count: usize,
) -> SelectState {
    let new_height = height.saturating_sub(2).max(1);
    let mut state = state.clone();
    let mut new_viewport = ViewportState {
        width,
        height: new_height,
        offset: state.viewport.offset,
    };

    // If growing taller, try to show more items above current selection
    match new_height.cmp(&state.viewport.height) {
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = new_height - state.viewport.height;
            new_viewport.offset = new_viewport.offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less
            if state.selected_index >= new_viewport.offset + new_height as usize =>
        {
            new_viewport.offset = state.selected_index + 1 - new_height as usize;

            if new_viewport.offset + new_height as usize > display_count {
                new_viewport.offset = display_count.saturating_sub(new_height as usize);
            }
        }
        _ => {}
    }

    state.viewport = new_viewport;
    state
}

/// Move the selected index in the given direction, wrapping at both ends
fn move_selected_index(
    state: &SelectState,
    display_count: usize,
    direction: CycleDirection,
) -> SelectState {
    if display_count == 0 {
        return state.clone();
    }

    let mut new_index = state.selected_index;
    let mut state = state.clone();
    let viewport_height = state.viewport.height as usize;

    match direction {
        Up => {
            if new_index == 0 {
                new_index = display_count - 1;
                state.viewport.offset = new_index.saturating_sub(viewport_height - 1);
            } else {
                new_index -= 1;
                if new_index < state.viewport.offset {
                    state.viewport.offset = new_index;
                }
            }
        }
        Down => {
            new_index = (new_index + 1) % display_count;
            if new_index < state.selected_index {
                state.viewport.offset = 0;
            } else if new_index >= state.viewport.offset + viewport_height {
                state.viewport.offset = new_index + 1 - viewport_height;
            }
        }
    }

    state.selected_index = new_index;
    state
}

/// Positions of the labels matching the filter, in list order
fn filter_displayed_indexes(labels: &[String], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..labels.len()).collect();
    }

    let matcher = SkimMatcherV2::default();

    labels
        .iter()
        .enumerate()
        .filter_map(|(i, label)| matcher.fuzzy_match(label, predicate).map(|_| i))
        .collect()
}
