//! Game driver: owns the session state and its gravity timer.
//!
//! The host feeds it wall-clock milliseconds and player actions. The driver
//! keeps the timer in step with the session (armed while playing, re-armed
//! when the level changes the gravity period, cancelled otherwise) and
//! forwards lock and lifecycle events to the optional [`EventLog`].

use colorfall_core::{GameSnapshot, GameState};
use colorfall_types::GameAction;

use crate::event_log::{EventLog, LogRecord};
use crate::timer::{GravityTimer, TickTicket};

#[derive(Debug)]
pub struct GameDriver {
    state: GameState,
    timer: GravityTimer,
    log: Option<EventLog>,
    /// Latest timestamp seen from the host.
    now_ms: u64,
    /// Set by `stop`; only `start` clears it.
    stopped: bool,
}

impl GameDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            timer: GravityTimer::new(),
            log: None,
            now_ms: 0,
            stopped: false,
        }
    }

    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Begin a new session.
    ///
    /// The timer is cancelled before the state resets, so a ticket obtained
    /// earlier is never applied to the new session.
    pub fn start(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        self.stopped = false;
        self.timer.cancel();
        self.state.start();
        self.write_log(LogRecord::Start {
            session_id: self.state.session_id(),
            seed: self.state.seed(),
        });

        if self.state.is_playing() {
            self.timer.arm(now_ms, self.state.gravity_interval_ms());
        } else {
            self.log_game_over();
        }
    }

    /// Tear down: stop gravity and freeze the session until the next
    /// `start`. The board and score are left as is.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.timer.cancel();
        self.write_log(LogRecord::Stop {
            session_id: self.state.session_id(),
        });
    }

    /// Apply a player action. Returns whether the session changed.
    pub fn apply(&mut self, action: GameAction, now_ms: u64) -> bool {
        if action == GameAction::Start {
            self.start(now_ms);
            return true;
        }
        if self.stopped {
            return false;
        }

        self.now_ms = now_ms;
        let changed = self.state.apply_action(action);
        self.sync();
        changed
    }

    /// Deliver every gravity tick due at `now_ms`. Returns how many applied.
    pub fn advance(&mut self, now_ms: u64) -> usize {
        self.now_ms = now_ms;
        let mut applied = 0;
        while let Some(ticket) = self.timer.poll(now_ms) {
            if self.deliver(ticket) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply one tick. Tickets from a cancelled or replaced schedule are
    /// ignored and `false` is returned.
    pub fn deliver(&mut self, ticket: TickTicket) -> bool {
        if self.stopped || !self.timer.accepts(ticket) {
            return false;
        }
        self.state.tick();
        self.sync();
        true
    }

    /// Bring timer and log in line with the state after a step.
    fn sync(&mut self) {
        if let Some(event) = self.state.take_last_event() {
            self.write_log(LogRecord::Lock {
                session_id: self.state.session_id(),
                event,
            });
        }

        if self.stopped || !self.state.is_playing() {
            if self.timer.is_armed() {
                self.timer.cancel();
                if self.state.is_game_over() {
                    self.log_game_over();
                }
            }
            return;
        }

        let period = self.state.gravity_interval_ms();
        if self.timer.period_ms() != Some(period) {
            self.timer.arm(self.now_ms, period);
        }
    }

    fn log_game_over(&mut self) {
        self.write_log(LogRecord::GameOver {
            session_id: self.state.session_id(),
            score: self.state.score(),
            rows_cleared: self.state.rows_cleared(),
            level: self.state.level(),
        });
    }

    fn write_log(&mut self, record: LogRecord) {
        let Some(log) = self.log.as_mut() else {
            return;
        };
        if let Err(e) = log.record(&record) {
            eprintln!("[EventLog] write failed, logging disabled: {:#}", e);
            self.log = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorfall_types::GamePhase;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn records(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_idle_driver_has_no_timer() {
        let mut driver = GameDriver::new(1);
        assert!(!driver.timer().is_armed());
        assert_eq!(driver.advance(100_000), 0);
        assert!(!driver.apply(GameAction::MoveLeft, 0));
        assert_eq!(driver.snapshot().phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_start_arms_gravity_at_level_zero_period() {
        let mut driver = GameDriver::new(1);
        driver.start(500);

        assert!(driver.snapshot().is_playing);
        assert_eq!(driver.timer().period_ms(), Some(1200));
        assert_eq!(driver.timer().next_due_ms(), Some(1700));
    }

    #[test]
    fn test_advance_moves_piece_down_once_per_period() {
        let mut driver = GameDriver::new(1);
        driver.start(0);
        let y0 = driver.snapshot().active.unwrap().y;

        assert_eq!(driver.advance(1_199), 0);
        assert_eq!(driver.advance(1_200), 1);
        assert_eq!(driver.snapshot().active.unwrap().y, y0 + 1);
        assert_eq!(driver.advance(2_400), 1);
        assert_eq!(driver.snapshot().active.unwrap().y, y0 + 2);
    }

    #[test]
    fn test_ticket_from_before_start_is_rejected() {
        let mut driver = GameDriver::new(9);
        driver.start(0);
        let stale = driver.timer.poll(1_200).unwrap();

        driver.start(1_200);
        let before = driver.snapshot();
        assert!(!driver.deliver(stale));
        assert_eq!(driver.snapshot(), before);
        assert_eq!(before.session_id, 2);
    }

    #[test]
    fn test_ticket_after_stop_is_rejected() {
        let mut driver = GameDriver::new(9);
        driver.start(0);
        let ticket = driver.timer.poll(1_200).unwrap();

        driver.stop();
        assert!(!driver.deliver(ticket));
        assert!(!driver.timer().is_armed());
        assert_eq!(driver.advance(50_000), 0);
    }

    #[test]
    fn test_stopped_session_ignores_actions_and_stays_unarmed() {
        let mut driver = GameDriver::new(9);
        driver.start(0);
        driver.stop();
        let before = driver.snapshot();

        assert!(driver.is_stopped());
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
        ] {
            assert!(!driver.apply(action, 100), "{:?}", action);
        }
        assert!(!driver.timer().is_armed());
        assert_eq!(driver.advance(60_000), 0);
        assert_eq!(driver.snapshot(), before);
    }

    #[test]
    fn test_start_after_stop_resumes_gravity() {
        let mut driver = GameDriver::new(9);
        driver.start(0);
        driver.stop();

        assert!(driver.apply(GameAction::Start, 5_000));
        assert!(!driver.is_stopped());
        assert!(driver.timer().is_armed());
        assert!(driver.apply(GameAction::SoftDrop, 5_100));
        assert_eq!(driver.advance(6_200), 1);
    }

    #[test]
    fn test_game_over_cancels_timer() {
        let mut driver = GameDriver::new(3);
        driver.start(0);

        let mut now = 0;
        while driver.snapshot().is_playing {
            now += 1_200;
            driver.advance(now);
            assert!(now < 10_000_000, "game never ended");
        }

        assert!(driver.snapshot().is_game_over);
        assert!(!driver.timer().is_armed());
    }

    #[test]
    fn test_soft_drop_does_not_reset_gravity_schedule() {
        let mut driver = GameDriver::new(1);
        driver.start(0);

        assert!(driver.apply(GameAction::SoftDrop, 600));
        assert_eq!(driver.timer().next_due_ms(), Some(1200));
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut driver = GameDriver::new(3);
        driver.start(0);
        let mut now = 0;
        while driver.snapshot().is_playing {
            now += 1_200;
            driver.advance(now);
        }

        assert!(driver.apply(GameAction::Start, now));
        let snap = driver.snapshot();
        assert!(snap.is_playing);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.session_id, 2);
        assert!(driver.timer().is_armed());
    }

    #[test]
    fn test_event_log_records_session() {
        let out = SharedBuf::default();
        let mut driver = GameDriver::new(3).with_event_log(EventLog::from_writer(out.clone()));
        driver.start(0);
        let mut now = 0;
        while driver.snapshot().is_playing {
            now += 1_200;
            driver.advance(now);
        }
        driver.stop();

        let records = out.records();
        assert_eq!(records.first().unwrap()["type"], "start");
        assert_eq!(records[0]["seed"], 3);
        assert!(records.iter().any(|r| r["type"] == "lock"));
        let game_overs: Vec<_> = records.iter().filter(|r| r["type"] == "game_over").collect();
        assert_eq!(game_overs.len(), 1);
        assert_eq!(records.last().unwrap()["type"], "stop");
    }

    #[test]
    fn test_log_failure_does_not_stop_game() {
        let mut driver = GameDriver::new(1).with_event_log(EventLog::from_writer(FailingWriter));
        driver.start(0);

        assert!(driver.log.is_none());
        assert!(driver.snapshot().is_playing);
        assert_eq!(driver.advance(1_200), 1);
    }
}
