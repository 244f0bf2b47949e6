//! Element Definitions
//!
//! `Kind` is the material tag, `Cell` is what the lattice stores. Only
//! fluid cells carry an amount, so a non-fluid cell can never be read as
//! holding one.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default lower bound of a fluid cell's amount.
pub const FLUID_MIN: f32 = 8.0;
/// Default upper bound of a fluid cell's amount.
pub const FLUID_MAX: f32 = 15.0;
/// Minimum excess over `FLUID_MIN` before fluid spreads into empty sides.
pub const FLUID_SPREAD_THRESHOLD: f32 = 0.5;

pub const KIND_COUNT: usize = 9;

/// Material kind. Discriminants are the stable ids exported to JS.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Air.
    Empty = 0,
    /// Rock: never moves.
    Wall = 1,
    /// Sand: falls, slides diagonally.
    GranularSolid = 2,
    /// Wood: falls straight down, burns when fire sits on top of it.
    CombustibleSolid = 3,
    /// Fire: burns down into wood, falls, or smokes out.
    Combustion = 4,
    /// Dark smoke: left behind by burning wood.
    GasDark = 5,
    /// Light smoke: what fire becomes when it can't go anywhere.
    GasLight = 6,
    /// Balloon: rises, pops when blocked.
    BuoyantBody = 7,
    /// Water: carries an amount.
    Fluid = 8,
}

impl Kind {
    pub const ALL: [Kind; KIND_COUNT] = [
        Kind::Empty,
        Kind::Wall,
        Kind::GranularSolid,
        Kind::CombustibleSolid,
        Kind::Combustion,
        Kind::GasDark,
        Kind::GasLight,
        Kind::BuoyantBody,
        Kind::Fluid,
    ];

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Result<Kind> {
        Kind::ALL
            .get(id as usize)
            .copied()
            .ok_or(EngineError::UnknownKind(id))
    }

    #[inline]
    pub fn is_gas(self) -> bool {
        matches!(self, Kind::GasDark | Kind::GasLight)
    }

    /// Cells the tick engine never dispatches.
    #[inline]
    pub fn is_inert(self) -> bool {
        matches!(self, Kind::Empty | Kind::Wall)
    }
}

/// One lattice cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Air.
    #[default]
    Empty,
    /// Rock.
    Wall,
    /// Sand.
    GranularSolid,
    /// Wood.
    CombustibleSolid,
    /// Fire.
    Combustion,
    /// Dark smoke. Its countdown lives in the gas lifetime registry.
    GasDark,
    /// Light smoke. Its countdown lives in the gas lifetime registry.
    GasLight,
    /// Balloon.
    BuoyantBody,
    /// Water with its amount.
    Fluid(f32),
}

impl Cell {
    /// Build a cell of the given kind. Fluid cells are always created full.
    pub fn of_kind(kind: Kind, fluid_max: f32) -> Cell {
        match kind {
            Kind::Empty => Cell::Empty,
            Kind::Wall => Cell::Wall,
            Kind::GranularSolid => Cell::GranularSolid,
            Kind::CombustibleSolid => Cell::CombustibleSolid,
            Kind::Combustion => Cell::Combustion,
            Kind::GasDark => Cell::GasDark,
            Kind::GasLight => Cell::GasLight,
            Kind::BuoyantBody => Cell::BuoyantBody,
            Kind::Fluid => Cell::Fluid(fluid_max),
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Cell::Empty => Kind::Empty,
            Cell::Wall => Kind::Wall,
            Cell::GranularSolid => Kind::GranularSolid,
            Cell::CombustibleSolid => Kind::CombustibleSolid,
            Cell::Combustion => Kind::Combustion,
            Cell::GasDark => Kind::GasDark,
            Cell::GasLight => Kind::GasLight,
            Cell::BuoyantBody => Kind::BuoyantBody,
            Cell::Fluid(_) => Kind::Fluid,
        }
    }

    /// Fluid amount, `None` for every other kind.
    #[inline]
    pub fn amount(&self) -> Option<f32> {
        match self {
            Cell::Fluid(amount) => Some(*amount),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn is_gas(&self) -> bool {
        self.kind().is_gas()
    }
}
