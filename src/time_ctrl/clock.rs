// src/time_ctrl/clock.rs
//! Обратный отсчёт текущей фазы стола.

use serde::{Deserialize, Serialize};

/// Результат "протекания" времени.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClockState {
    /// Время ещё идёт.
    Running { remaining_secs: u32 },
    /// Отсчёт дошёл до нуля именно сейчас. Выдаётся ровно один раз на запуск.
    Expired,
    /// Таймер не запущен (или уже сработал).
    Idle,
}

/// Таймер фазы. Срабатывает один раз, потом молчит до следующего `start`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundClock {
    remaining_secs: u32,
    armed: bool,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запустить (или перезапустить) отсчёт.
    pub fn start(&mut self, secs: u32) {
        self.remaining_secs = secs;
        self.armed = true;
    }

    /// Остановить отсчёт без срабатывания.
    pub fn stop(&mut self) {
        self.remaining_secs = 0;
        self.armed = false;
    }

    pub fn is_running(&self) -> bool {
        self.armed
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Симулируем протекание `delta_secs` секунд.
    ///
    /// Запуск с нулевой длительностью срабатывает на первом же вызове.
    pub fn elapse(&mut self, delta_secs: u32) -> ClockState {
        if !self.armed {
            return ClockState::Idle;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(delta_secs);
        if self.remaining_secs == 0 {
            self.armed = false;
            ClockState::Expired
        } else {
            ClockState::Running {
                remaining_secs: self.remaining_secs,
            }
        }
    }
}
