//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{
    activate_characters, handle_knockback_requests, handle_respawn_requests, tick_locomotion,
};
