//! Headless safari run.
//!
//! Populates a scene, starts the session from the orb and plays a scripted
//! player who finds one animal every couple of seconds, in real time.
//!
//! ```text
//! cargo run -p safari_demo [config.json]
//! RUST_LOG=debug cargo run -p safari_demo
//! ```

use std::time::Duration;

use glam::Vec3;
use safari::prelude::*;
use safari::shared::Timer;

const FRAME: Duration = Duration::from_micros(11_111);
const SECONDS_PER_FIND: f32 = 1.5;

fn main() -> anyhow::Result<()> {
    safari::init_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => SafariConfig::load(&path)?,
        None => SafariConfig {
            seed: Some(360),
            ..SafariConfig::default()
        },
    };

    let mut app = SafariApp::new(config)?;
    app.subscribe(Box::new(|event: &SafariEvent| match event {
        SafariEvent::DiscoveryConfirmed {
            category,
            discovered_count,
            total,
        } => log::info!("[hud] {category} found ({discovered_count}/{total})"),
        SafariEvent::SessionEnded {
            won,
            score,
            total,
            time_used,
        } => log::info!(
            "[hud] {} with {score}/{total} in {time_used:.1}s",
            if *won { "won" } else { "time's up" }
        ),
        _ => {}
    }));

    let animals = populate(&mut app)?;
    let orb = app.spawn_orb("start-orb");
    let input = app.input_handle();

    input.interact(orb);

    let mut timer = Timer::new();
    let mut next_find = SECONDS_PER_FIND;
    let mut targets = animals.iter().copied();

    loop {
        let frame = timer.tick();
        app.update(frame);

        if !app.session().is_active() && timer.frame_count > 1 {
            break;
        }

        if frame.now >= next_find {
            next_find += SECONDS_PER_FIND;
            if let Some(animal) = targets.next() {
                input.hover(animal, true);
                input.interact(animal);
                input.hover(animal, false);
            }
        }

        std::thread::sleep(FRAME);
    }

    let hud = app.hud();
    for (category, found) in hud.indicators() {
        log::info!("  {} {category}", if found { "[x]" } else { "[ ]" });
    }
    log::info!(
        "{} frames, {} actors, rig at {:?}",
        app.frame_count(),
        app.actor_count(),
        app.rig().position
    );
    Ok(())
}

/// One animal per configured category plus some scenery and signage.
fn populate(app: &mut SafariApp) -> anyhow::Result<Vec<ActorKey>> {
    let names = app.config().game.categories.clone();
    let mut animals = Vec::with_capacity(names.len());

    for (i, name) in names.iter().enumerate() {
        let motion = MotionParams {
            radius: 2.0 + i as f32,
            path_rotation: i as f32 * 60.0,
            ..MotionParams::default()
        };
        let key = app.spawn_animal(&AnimalSpec::new(name.as_str()).with_motion(motion))?;
        app.model_loaded(key, &[])?;
        animals.push(key);
    }

    let manifest = SceneManifest {
        scenery: vec![
            ScenerySpec {
                name: "lapacho".into(),
                wind: Some(WindConfig::canopy(0.015)),
            },
            ScenerySpec {
                name: "pasto".into(),
                wind: None,
            },
        ],
        billboards: vec![
            BillboardSpec {
                name: "safari".into(),
                action: BillboardAction::Safari,
                interactive: true,
            },
            BillboardSpec {
                name: "vuelo".into(),
                action: BillboardAction::Vuelo,
                interactive: true,
            },
        ],
        ..SceneManifest::default()
    };
    app.spawn_manifest(&manifest);

    let scenery: Vec<ActorKey> = app
        .actors()
        .filter(|(key, _)| app.wind(*key).is_some())
        .map(|(key, _)| key)
        .collect();
    for key in scenery {
        let parts: Vec<Vec3> = (0..8).map(|i| Vec3::new(0.0, 1.0 + i as f32 * 0.5, 0.0)).collect();
        app.model_loaded(key, &parts)?;
    }

    Ok(animals)
}
