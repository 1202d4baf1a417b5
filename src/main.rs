//! Myco Runner entry point
//!
//! The playable build targets the browser through the `web` module;
//! native builds run a headless scripted playthrough that exercises the
//! whole intent surface against a hand-advanced clock.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use myco_runner::consts::TARGET_WORD;
    use myco_runner::runner::Runner;
    use myco_runner::session::{ManualClock, Session};
    use myco_runner::shop;
    use myco_runner::{GameStatus, Tuning};

    /// Simulation step, seconds
    const DT: f32 = 0.2;

    /// Drive one run to its end and report how it went
    pub fn run(seed: u64) {
        let clock = ManualClock::new();
        let mut session = Session::new(clock.clone(), Tuning::default());
        let mut runner = Runner::new();
        let mut rng = Pcg32::seed_from_u64(seed);

        session.start();
        let mut lane_count = session.lane_count;
        let mut level = session.level;
        let mut distance = 0.0f32;
        log::info!("Demo run started (seed {seed}, {lane_count} lanes)");

        let mut frames = 0u32;
        while frames < 20_000
            && !matches!(session.status, GameStatus::GameOver | GameStatus::Victory)
        {
            frames += 1;
            clock.advance(f64::from(DT) * 1_000.0);
            session.tick();

            if session.lane_count != lane_count {
                lane_count = session.lane_count;
                runner.realign(lane_count);
            }
            if session.level != level {
                level = session.level;
                log::info!(
                    "Level {level}: {lane_count} lanes, speed {}%",
                    session.speed_percent()
                );
            }

            // drift around and hop like a player would
            match rng.random_range(0..6u32) {
                0 => runner.move_lane(-1, lane_count),
                1 => runner.move_lane(1, lane_count),
                2 => runner.jump(session.has_double_jump),
                _ => {}
            }
            runner.update(DT);

            distance += session.speed * DT;
            session.set_distance(distance);

            // pickups stream in while running
            if rng.random_bool(0.6) {
                let value = [10u64, 25, 50][rng.random_range(0..3usize)];
                session.collect_gem(value);
            }
            if rng.random_bool(0.2) {
                let missing = (0..TARGET_WORD.len()).find(|i| !session.is_letter_collected(*i));
                if let Some(index) = missing {
                    session.collect_letter(index);
                }
            }
            if rng.random_bool(0.01) {
                session.take_damage();
            }

            // browse the store once flush with spores
            if session.score >= 3_000 && rng.random_bool(0.03) {
                session.open_shop();
                for item in shop::available_items(&session) {
                    if session.score >= item.cost && session.buy_item(item.kind, item.cost) {
                        log::info!("Bought {} for {}", item.name, item.cost);
                        break;
                    }
                }
                clock.advance(1_500.0);
                session.tick();
                session.close_shop();
            }
        }

        let snap = session.snapshot();
        log::info!(
            "Run over after {frames} frames: {} at level {} with score {}, {} gems, {:.0} distance",
            snap.status.as_str(),
            snap.level,
            snap.score,
            snap.gems_collected,
            snap.distance,
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Myco Runner (native) starting...");
    log::info!("Headless demo mode - run with `trunk serve` for the browser version");
    demo::run(42);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds are driven through `web::MycoRunner`
}
