#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use std::collections::VecDeque;

use anyhow::{Result, anyhow};
use core_actions::{Controller, Frontend, LoopControl};
use core_events::{ENTER, ESC, Key, NamedKey, ctrl_key};
use core_model::{EditorModel, View};
use core_state::EditorState;
use core_text::{DEFAULT_TAB_STOP, Document};

/// Frontend replaying a fixed key script and recording what each refresh saw.
#[derive(Default)]
pub struct ScriptedFrontend {
    keys: VecDeque<Key>,
    pub refreshes: usize,
    pub statuses: Vec<Option<String>>,
}

impl ScriptedFrontend {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    pub fn next_key(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }
}

impl Frontend for ScriptedFrontend {
    fn refresh(&mut self, model: &mut EditorModel) -> Result<()> {
        self.refreshes += 1;
        self.statuses
            .push(model.state().status_text().map(str::to_string));
        Ok(())
    }

    fn read_key(&mut self, _model: &mut EditorModel) -> Result<Key> {
        self.keys.pop_front().ok_or_else(|| anyhow!("key script exhausted"))
    }
}

pub fn model(text: &str) -> EditorModel {
    let doc = Document::from_bytes(text.as_bytes(), DEFAULT_TAB_STOP);
    EditorModel::new(EditorState::new(doc), View::new(80, 24))
}

pub fn text(model: &EditorModel) -> String {
    String::from_utf8(model.state().document.serialize()).unwrap()
}

/// Keys for typing `s` byte by byte.
pub fn typed(s: &str) -> Vec<Key> {
    s.bytes().map(Key::Byte).collect()
}

pub fn enter() -> Key {
    Key::Byte(ENTER)
}

pub fn esc() -> Key {
    Key::Byte(ESC)
}

pub fn ctrl(c: u8) -> Key {
    Key::Byte(ctrl_key(c))
}

pub fn arrow(named: NamedKey) -> Key {
    Key::Named(named)
}

/// Drive the controller the way the main loop does until the script runs out
/// or the controller asks to quit.
pub fn run(
    controller: &mut Controller,
    model: &mut EditorModel,
    fe: &mut ScriptedFrontend,
) -> LoopControl {
    while let Some(key) = fe.next_key() {
        fe.refresh(model).unwrap();
        if controller.process_key(key, model, fe).unwrap() == LoopControl::Quit {
            return LoopControl::Quit;
        }
    }
    LoopControl::Continue
}
