//! Background load of the question data.
//!
//! The load runs off the UI thread (a plain thread on native, a
//! `spawn_local` future on the web) and delivers its result over an mpsc
//! channel that `update` polls each frame. Every load carries a generation
//! number; a result whose generation is no longer current was superseded by
//! a retry and is dropped, so a stale load can never write into state.

use super::QuizApp;
use crate::data::{self, DataError, QuestionBank};
use std::sync::mpsc;

pub(crate) type LoadMessage = (u64, Result<QuestionBank, DataError>);

/// Where the data load stands. Session screens are only reachable from
/// `Ready`.
#[derive(Debug, Clone)]
pub enum LoadPhase {
    Pending,
    Failed(String),
    Ready,
}

impl QuizApp {
    /// Kicks off a (re)load of the question file. Any load still in flight
    /// is superseded.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        self.load_generation += 1;
        self.load = LoadPhase::Pending;

        let (tx, rx) = mpsc::channel();
        self.load_rx = Some(rx);
        spawn_load(self.load_generation, tx, ctx.clone());
    }

    /// Polled once per frame; applies a finished load to state.
    pub fn poll_load(&mut self) {
        let Some((generation, result)) = self.load_rx.as_ref().and_then(|rx| rx.try_recv().ok())
        else {
            return;
        };
        if generation != self.load_generation {
            // Superseded by a retry before it finished.
            log::info!("dropping stale question load (generation {generation})");
            return;
        }
        self.load_rx = None;

        match result {
            Ok(bank) => {
                self.bank = bank;
                self.load = LoadPhase::Ready;
                if let Some(route) = self.pending_route.take() {
                    let (year, week) = route.selection();
                    self.session.seed_selection(year, week);
                }
            }
            Err(err) => {
                log::error!("question load failed: {err}");
                self.load = LoadPhase::Failed(err.to_string());
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_load(generation: u64, tx: mpsc::Sender<LoadMessage>, ctx: egui::Context) {
    std::thread::spawn(move || {
        let result = data::load_questions();
        let _ = tx.send((generation, result));
        ctx.request_repaint();
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn_load(generation: u64, tx: mpsc::Sender<LoadMessage>, ctx: egui::Context) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = data::load_questions().await;
        let _ = tx.send((generation, result));
        ctx.request_repaint();
    });
}
