//! Court and match-over screens

use glam::Vec2;

use crate::platform::{BLACK, Renderer, WHITE};
use crate::sim::{GameState, Side};

/// One frame of active play: court, paddles, ball, divider, scores.
pub fn draw_frame<R: Renderer>(renderer: &mut R, state: &GameState) {
    renderer.clear(BLACK);

    renderer.draw_rect(state.player.rect(), WHITE);
    renderer.draw_rect(state.ai.rect(), WHITE);
    renderer.draw_ellipse(state.ball.rect(), WHITE);

    let mid_x = state.arena.width / 2.0;
    renderer.draw_line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, state.arena.height),
        WHITE,
    );

    renderer.draw_text(
        &state.score.player.to_string(),
        Vec2::new(state.arena.width / 4.0, 20.0),
    );
    renderer.draw_text(
        &state.score.ai.to_string(),
        Vec2::new(state.arena.width * 3.0 / 4.0, 20.0),
    );

    renderer.present();
}

/// Winner banner plus the replay options, shown while the loop waits for a
/// choice.
pub fn draw_match_over<R: Renderer>(renderer: &mut R, state: &GameState, winner: Side) {
    const OPTIONS: [&str; 4] = [
        "Press 3 for Best of 3",
        "Press 5 for Best of 5",
        "Press 7 for Best of 7",
        "Press ESC to Exit",
    ];

    renderer.clear(BLACK);

    let center = state.arena.center();
    let banner = match winner {
        Side::Player => "Player Wins!",
        Side::Ai => "AI Wins!",
    };
    renderer.draw_text(banner, Vec2::new(center.x, center.y - 100.0));

    for (i, line) in OPTIONS.iter().enumerate() {
        renderer.draw_text(line, Vec2::new(center.x, center.y + i as f32 * 40.0));
    }

    renderer.present();
}
