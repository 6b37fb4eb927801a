use crate::core::proto;
use crate::types::{Bullet, Ship, Vector2, WorldSnapshot};

// Absent vectors decode as the protobuf default, i.e. zero.
fn vector(v: Option<proto::Vector>) -> Vector2 {
    v.map_or(Vector2::ZERO, |v| Vector2::new(v.x, v.y))
}

impl From<&proto::Ship> for Ship {
    fn from(ship: &proto::Ship) -> Self {
        Self {
            position: vector(ship.position),
            rotation_vector: vector(ship.rotation_vector),
        }
    }
}

impl From<&proto::Bullet> for Bullet {
    fn from(bullet: &proto::Bullet) -> Self {
        Self {
            position: vector(bullet.position),
        }
    }
}

impl From<proto::Battleground> for WorldSnapshot {
    fn from(update: proto::Battleground) -> Self {
        Self {
            ships: update.ships.iter().map(Ship::from).collect(),
            bullets: update.bullets.iter().map(Bullet::from).collect(),
        }
    }
}
