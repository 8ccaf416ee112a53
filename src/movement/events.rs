//! Movement domain: entry points driven by other systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Sent by the spawn orchestrator to hand control to (or take it from) a character.
#[derive(Debug)]
pub struct RespawnFinished {
    pub entity: Entity,
    pub finished: bool,
}

impl Message for RespawnFinished {}

/// Sent by the damage layer to knock a character back.
#[derive(Debug)]
pub struct KnockBackRequest {
    pub entity: Entity,
}

impl Message for KnockBackRequest {}
