mod display;

use ::rand::thread_rng;
use macroquad::prelude::*;

use skystrike::assets::Assets;
use skystrike::compute;
use skystrike::entities::GameEvent;
use skystrike::input;

fn window_conf() -> Conf {
    Conf {
        window_title: String::from("Skystrike"),
        window_width: compute::WIDTH as i32,
        window_height: compute::HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    set_pc_assets_folder("assets");

    log::info!("loading assets");
    let assets = Assets::load().await;

    let mut rng = thread_rng();
    let mut state = compute::init_state();

    loop {
        let frame_input = input::poll();
        state = compute::tick(&state, &frame_input, &mut rng);

        for event in &state.events {
            match event {
                GameEvent::ShotFired => assets.play("shoot.wav", 0.2),
                GameEvent::EnemyDestroyed => assets.play("explode.wav", 0.5),
                GameEvent::BombDetonated => assets.play("bomb.wav", 0.5),
                GameEvent::PowerUpCollected => assets.play("powerup.wav", 0.5),
            }
        }

        display::render(&state, &assets);
        next_frame().await;
    }
}
