use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::timer::TickSource;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event<T: TickSource>(state: &mut AppState<T>, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::TimerTick(id) => {
            let mut actions = Vec::new();
            if state.timer.tick(id).is_some() {
                actions.push(Action::Bell);
            }
            state.dirty = true;
            actions
        }
        AppEvent::Frame => {
            if !state.view().stroke.is_settled(Instant::now()) {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal<T: TickSource>(state: &mut AppState<T>, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key<T: TickSource>(state: &mut AppState<T>, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            state.timer.toggle();
            state.dirty = true;
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}
