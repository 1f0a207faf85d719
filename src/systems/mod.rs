//! Systems module - physical systems for VMC calculations.

mod trapped;

pub use trapped::{
    TrappedBosons, DEFAULT_FD_STEP, DEFAULT_INTERACTION, DEFAULT_KINETIC_PREFACTOR,
};
