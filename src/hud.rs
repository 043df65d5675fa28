use bevy::prelude::*;

use crate::sim::CarState;

/// Marker for the live status line; the hints line above it never changes.
#[derive(Component)]
pub struct StatusLine;

const HINTS: &str = "Setas: dirigir carro   WASD/QE: mover camera   R: resetar   ESC: sair";

pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(HINTS),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(26.0),
            left: Val::Px(10.0),
            ..default()
        },
        StatusLine,
    ));
}

pub fn update_hud(car: Single<&CarState>, status: Single<&mut Text, With<StatusLine>>) {
    status.into_inner().0 = format_status(&car);
}

pub fn format_status(car: &CarState) -> String {
    format!(
        "Carro: Pos ({:.2}, {:.2}) Direcao {:.1} Velocidade {:.2} Esterco {:.1}",
        car.x, car.z, car.heading, car.speed, car.wheel_angle
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_formats_the_default_pose() {
        let car = CarState::default();
        assert_eq!(
            format_status(&car),
            "Carro: Pos (0.00, 6.00) Direcao 180.0 Velocidade 0.00 Esterco 0.0"
        );
    }

    #[test]
    fn status_line_rounds_to_the_hud_precision() {
        let car = CarState {
            x: -1.234,
            z: -8.456,
            heading: 93.27,
            speed: -2.5,
            wheel_angle: -12.34,
            ..Default::default()
        };
        assert_eq!(
            format_status(&car),
            "Carro: Pos (-1.23, -8.46) Direcao 93.3 Velocidade -2.50 Esterco -12.3"
        );
    }
}
