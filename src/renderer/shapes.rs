//! Frame composition: background, HUD, play area and actors

use glam::Vec2;

use super::{Color, RenderSurface, TextAlign, TextStyle};
use crate::consts::MAX_HUD_COUNT;
use crate::sim::{Actor, Enemy, GameState, Hud, Player, Projectile};

/// HUD font size before scaling
const HUD_FONT_PX: f32 = 20.0;
const HUD_FONT_FAMILY: &str = "Courier";
/// The HUD column starts at `resolution.x / HUD_X_DIVISOR`
const HUD_X_DIVISOR: f32 = 1.45;
/// Emblem centre as a fraction of the resolution
const EMBLEM_CENTER: (f32, f32) = (0.83, 0.78);
/// Emblem rings, outermost first (unscaled radius, colour)
const EMBLEM_RINGS: [(f32, Color); 4] = [
    (60.0, Color::Red),
    (55.0, Color::LightGrey),
    (50.0, Color::Red),
    (45.0, Color::DarkBlue),
];

/// Draw one complete frame
pub fn draw_frame<S: RenderSurface>(surface: &mut S, state: &GameState, show_hitbox: bool) {
    let resolution = surface.resolution();
    surface.fill_rect(Vec2::ZERO, resolution, Color::DarkBlue);

    draw_hud(surface, &state.hud, state.padding);

    let area = state.game_area();
    surface.fill_rect(area.min, area.size(), Color::LightGrey);

    for actor in &state.actors {
        draw_actor(surface, actor, show_hitbox);
    }
}

pub fn draw_actor<S: RenderSurface>(surface: &mut S, actor: &Actor, show_hitbox: bool) {
    match actor {
        Actor::Player(player) => draw_player(surface, player, show_hitbox),
        Actor::Enemy(enemy) => draw_enemy(surface, enemy),
        Actor::Projectile(projectile) => draw_projectile(surface, projectile),
    }
}

/// Ship triangle, plus the hitbox dot in focus mode
pub fn draw_player<S: RenderSurface>(surface: &mut S, player: &Player, show_hitbox: bool) {
    let scale = surface.scale();
    let (x, y) = (player.body.pos.x, player.body.pos.y);
    let w = player.body.width * scale;
    let h = player.body.height * scale;

    let hull = [
        Vec2::new(x, y + h),
        Vec2::new(x + h / 2.0, y),
        Vec2::new(x + h, y + w),
    ];
    surface.fill_polygon(&hull, Color::Black);

    if show_hitbox && player.is_slowed {
        let radius = player.body.width / 7.0 * scale;
        surface.fill_ellipse(
            Vec2::new(x + w * 0.5, y + h * 0.65),
            Vec2::splat(radius),
            Color::Red,
        );
    }
}

pub fn draw_enemy<S: RenderSurface>(surface: &mut S, enemy: &Enemy) {
    let scale = surface.scale();
    let size = Vec2::new(enemy.body.width, enemy.body.height) * scale;
    surface.fill_rect(enemy.body.pos, size, Color::Purple);
}

pub fn draw_projectile<S: RenderSurface>(surface: &mut S, projectile: &Projectile) {
    let scale = surface.scale();
    let radii = Vec2::new(
        projectile.body.width / 1.5 * scale,
        projectile.body.height * scale,
    );
    surface.fill_ellipse(projectile.body.pos, radii, Color::Yellow);
}

/// Counter column on the right-hand side plus the emblem below it
pub fn draw_hud<S: RenderSurface>(surface: &mut S, hud: &Hud, padding: f32) {
    let scale = surface.scale();
    let resolution = surface.resolution();
    let x = resolution.x / HUD_X_DIVISOR;

    let style = TextStyle {
        size_px: HUD_FONT_PX * scale,
        family: HUD_FONT_FAMILY,
        fill: Color::LightGrey,
        stroke: Some(Color::LightGrey),
        align: TextAlign::Left,
    };

    // (text, unscaled baseline)
    let lines = [
        (format!("HighScore: {}", hud.high_score), padding),
        (format!("Score: {}", hud.score), HUD_FONT_PX * 3.0),
        (format!("Lives: {}", stars(hud.lives)), HUD_FONT_PX * 5.5),
        (format!("Bombs: {}", stars(hud.bombs)), HUD_FONT_PX * 6.5),
        (format!("Power: {}", hud.power), HUD_FONT_PX * 9.0),
        (format!("Graze: {}", hud.graze), HUD_FONT_PX * 10.0),
        (format!("Collected: {}", hud.collected_score), HUD_FONT_PX * 11.0),
    ];

    for (text, baseline) in &lines {
        surface.draw_text(text, Vec2::new(x, baseline * scale), &style);
    }

    let center = Vec2::new(
        resolution.x * EMBLEM_CENTER.0,
        resolution.y * EMBLEM_CENTER.1,
    );
    for (radius, color) in EMBLEM_RINGS {
        surface.fill_ellipse(center, Vec2::splat(radius * scale), color);
    }
}

fn stars(count: u32) -> String {
    "*".repeat(count.min(MAX_HUD_COUNT) as usize)
}
