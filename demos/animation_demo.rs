//! Samples every animation kind from the terminal: builds a plan per kind,
//! plays it with a frame-loop player, and prints the driven progress value as
//! a bar so the motion shape is visible without a renderer.
//!
//! Run with: cargo run --example animation_demo

use kimochi::prelude::*;

fn bar(value: f32) -> String {
    // Map roughly [-3, 3] progress range onto a 60-column gauge
    let center = 30i32;
    let offset = (value * 10.0).round() as i32;
    let pos = (center + offset).clamp(0, 59) as usize;
    let mut cells = vec![' '; 60];
    cells[pos] = '●';
    cells.into_iter().collect()
}

fn main() {
    env_logger::init();

    let config = PlanConfig::new(600.0);

    for kind in AnimationType::ALL {
        let plan = build_plan(kind, 0.8, &config);
        let property = style_for(kind);
        println!(
            "\n{:?} -> {:?}, {} segments over {:.0}ms{}",
            kind,
            property,
            plan.segments().len(),
            plan.total_duration_ms(),
            if plan.looping() { ", looping" } else { ", one-shot" }
        );

        let start = if kind == AnimationType::Shake { 0.0 } else { 1.0 };
        let progress = Progress::new(start);
        let binding = StyleBinding::new(kind, &progress);
        let mut player = Player::start(plan, &progress);

        // One cycle at ~60fps, printing every 4th frame
        for frame in 0..40 {
            let state = player.advance(16.0);
            if frame % 4 == 0 {
                println!("  {} {:>6.2}  {:?}", bar(progress.get()), progress.get(), binding.resolve());
            }
            if state == PlayerState::Finished {
                break;
            }
        }
        player.stop();
    }
}
