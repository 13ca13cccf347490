//! Per-locale conversion routines bound into [`crate::registry::Registries::builtin`].
//!
//! Script normalization, reading derivation, and romanization for the
//! locales the shipped data covers. Everything here is a pure table-driven
//! function; the tables are scoped to the terminology domain rather than
//! aiming for linguistic completeness.

pub mod ja;
pub mod ko;
pub mod zh;

/// Looks up `ch` in a character-pair table, falling back to `ch` itself.
pub(crate) fn map_char(table: &[(char, char)], ch: char) -> char {
    table.iter().find(|(from, _)| *from == ch).map_or(ch, |(_, to)| *to)
}
