//! Test doubles for the draw surface and cue player

use crate::game::{Cue, CuePlayer};
use crate::render::{Surface, TextStyle};
use sdl2::pixels::Color;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Text { text: String, x: i32, y: i32, style: TextStyle },
    Die { face: u8, x: i32, y: i32 },
}

/// Surface that records every call instead of drawing
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface { width, height, calls: Vec::new() }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn text_call(&self, wanted: &str) -> Option<&DrawCall> {
        self.calls
            .iter()
            .find(|call| matches!(call, DrawCall::Text { text, .. } if text == wanted))
    }

    pub fn dice(&self) -> Vec<(u8, i32, i32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Die { face, x, y } => Some((*face, *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) -> Result<(), String> {
        self.calls.push(DrawCall::Text { text: text.to_string(), x, y, style });
        Ok(())
    }

    fn draw_die(&mut self, face: u8, x: i32, y: i32) -> Result<(), String> {
        self.calls.push(DrawCall::Die { face, x, y });
        Ok(())
    }
}

/// Cue player that remembers what was played; clones share the log
#[derive(Clone, Default)]
pub struct RecordingCues {
    played: Rc<RefCell<Vec<Cue>>>,
}

impl RecordingCues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Cue> {
        self.played.borrow().clone()
    }
}

impl CuePlayer for RecordingCues {
    fn play(&self, cue: Cue) {
        self.played.borrow_mut().push(cue);
    }
}
