//! Driver lifecycle state
//!
//! The Port driver starts uninitialized and becomes initialized once a pin
//! table has been applied. Every other service checks this state first.
//! There is no transition back.

use crate::config::PinConfig;

/// Lifecycle state of the GPIO drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleState<'a> {
    /// No pin table applied yet
    #[default]
    Uninitialized,
    /// Pin table applied and kept for lookups
    Initialized(&'a [PinConfig]),
}

impl<'a> ModuleState<'a> {
    /// Check if a pin table has been applied
    pub const fn is_initialized(&self) -> bool {
        matches!(self, ModuleState::Initialized(_))
    }

    /// Get the applied pin table
    pub const fn table(&self) -> Option<&'a [PinConfig]> {
        match self {
            ModuleState::Initialized(table) => Some(table),
            ModuleState::Uninitialized => None,
        }
    }

    /// Look up a configured pin by index
    pub fn pin(&self, index: u8) -> Option<&'a PinConfig> {
        self.table().and_then(|table| table.get(usize::from(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: [PinConfig; 2] = [PinConfig::input(0, 0), PinConfig::input(0, 1)];

    #[test]
    fn test_uninitialized() {
        let state = ModuleState::default();
        assert!(!state.is_initialized());
        assert!(state.table().is_none());
        assert!(state.pin(0).is_none());
    }

    #[test]
    fn test_lookup() {
        let state = ModuleState::Initialized(&TABLE);
        assert!(state.is_initialized());
        assert_eq!(state.pin(1).map(|p| p.bit), Some(1));
        assert!(state.pin(2).is_none());
    }
}
