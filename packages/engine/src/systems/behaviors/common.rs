//! Direction offsets shared by the transition rules. +y points down.

pub type Dir = (i32, i32);

pub const DOWN: Dir = (0, 1);
pub const DOWN_LEFT: Dir = (-1, 1);
pub const DOWN_RIGHT: Dir = (1, 1);
pub const UP: Dir = (0, -1);
pub const UP_LEFT: Dir = (-1, -1);
pub const UP_RIGHT: Dir = (1, -1);
pub const LEFT: Dir = (-1, 0);
pub const RIGHT: Dir = (1, 0);

/// The three cells a falling particle can land in.
pub const FALL: [Dir; 3] = [DOWN, DOWN_LEFT, DOWN_RIGHT];
/// The three cells a rising particle can enter.
pub const RISE: [Dir; 3] = [UP, UP_LEFT, UP_RIGHT];
pub const SIDEWAYS: [Dir; 2] = [LEFT, RIGHT];
