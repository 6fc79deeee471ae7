// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    fraction: Arc<Mutex<f32>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, fraction: Arc<Mutex<f32>>) -> Self {
        Self { status, fraction, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
    fn set_fraction(&self, f: f32) {
        if let Ok(mut v) = self.fraction.lock() {
            *v = f;
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.set_fraction(0.0);
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _index: usize) {
        self.done += 1;
        if self.total > 0 {
            self.set_fraction(self.done as f32 / self.total as f32);
        }
    }
    fn finish(&mut self) {
        self.set_fraction(1.0);
        if self.total == 0 {
            self.set_status(s!("Nothing to process"));
        } else {
            self.set_status(format!("Data processing completed ({}/{})", self.done, self.total));
        }
    }
}
