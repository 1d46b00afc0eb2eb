/*
 *  The board-generation and tile-connectivity engine for a LianLianKan
 *  (tile-matching) puzzle.
 */

pub mod board;
pub(crate) mod consts;
pub mod complexity;
pub mod coords;
pub mod generator;
pub mod notation;
pub mod path;
pub mod sets;
pub mod shape;
pub mod solvability;
pub mod tile;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::Board,
        complexity::score,
        consts::*,
        coords::{self, *},
        generator::{Generated, generate},
        notation::*,
        path::{Path, connect},
        sets::CellSet,
        shape::{Mask, ShapeMask},
        solvability::{every_tile_has_partner, find_pair, has_full_pairing},
        tile::{Effects, Tile, obstacles_between},
    };
}
