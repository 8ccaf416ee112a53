//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Destroy a character, leaving a death effect behind.
#[derive(Debug)]
pub struct DieRequest {
    pub entity: Entity,
}

impl Message for DieRequest {}
