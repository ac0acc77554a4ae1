use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::model::{Mode, Model};
use crate::app::update::{Direction, Message};

/// Translate a terminal event into a message, if it means anything in
/// the current state.
pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(*key, model),
        Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
        _ => None,
    }
}

pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if model.help_visible {
        return Some(Message::HideHelp);
    }
    match model.mode {
        Mode::Navigation => navigation_message(key),
        Mode::Insert => insert_message(key),
    }
}

fn navigation_message(key: KeyEvent) -> Option<Message> {
    let msg = match key.code {
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Char('i') | KeyCode::Up => Message::Move(Direction::Up),
        KeyCode::Char('k') | KeyCode::Down => Message::Move(Direction::Down),
        KeyCode::Char('j') | KeyCode::Left => Message::Move(Direction::Left),
        KeyCode::Char('l') | KeyCode::Right => Message::Move(Direction::Right),
        KeyCode::Char('s') | KeyCode::Home => Message::LineStart,
        KeyCode::Char('e') | KeyCode::End => Message::LineEnd,
        KeyCode::Char('o') => Message::WordForward,
        KeyCode::Char('u') => Message::WordBack,
        KeyCode::Char('x') | KeyCode::Delete => Message::DeleteAt,
        KeyCode::Char('f') => Message::EnterInsert,
        KeyCode::Char('a') => Message::EnterInsertAfter,
        KeyCode::Char('w') => Message::Save,
        KeyCode::Char('r') => Message::Reload,
        KeyCode::Char('?') | KeyCode::F(1) => Message::ToggleHelp,
        _ => return None,
    };
    Some(msg)
}

fn insert_message(key: KeyEvent) -> Option<Message> {
    let msg = match key.code {
        KeyCode::Esc => Message::ExitInsert,
        KeyCode::Backspace => Message::DeleteBack,
        KeyCode::Enter => Message::InsertNewline,
        KeyCode::Tab => Message::InsertChar('\t'),
        KeyCode::Delete => Message::DeleteAt,
        KeyCode::Up => Message::Move(Direction::Up),
        KeyCode::Down => Message::Move(Direction::Down),
        KeyCode::Left => Message::Move(Direction::Left),
        KeyCode::Right => Message::Move(Direction::Right),
        KeyCode::Home => Message::LineStart,
        KeyCode::End => Message::LineEnd,
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::Save,
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Message::InsertChar(c)
        }
        _ => return None,
    };
    Some(msg)
}
