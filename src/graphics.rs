//! Read-only renderer for the simulation.
//!
//! Draws each living organism as a circle and the generation stats as a
//! centered text line. Never mutates simulation state.

use macroquad::prelude::*;

use swarm_evo::simulation::organism::Kind;
use swarm_evo::simulation::world::World;

fn organism_color(kind: Kind, sighted: bool) -> Color {
    if sighted {
        return WHITE;
    }
    match kind {
        Kind::Prey => Color::from_rgba(0, 169, 255, 255),
        Kind::Predator => Color::from_rgba(255, 86, 0, 255),
    }
}

/// Draws every living organism.
pub fn draw_world(world: &World) {
    clear_background(BLACK);
    for organism in world.predators.iter().chain(world.prey.iter()) {
        if !organism.alive {
            continue;
        }
        draw_circle(
            organism.pos[0],
            organism.pos[1],
            organism.radius,
            organism_color(organism.kind, organism.sighted),
        );
    }
}

/// Draws a stats line centered on the screen.
pub fn draw_stats(text: &str) {
    let font_size = 16.0;
    let text_size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        screen_width() / 2.0 - text_size.width / 2.0,
        screen_height() / 2.0,
        font_size,
        WHITE,
    );
}
