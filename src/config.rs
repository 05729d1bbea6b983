use core::time::Duration;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship cells in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Reclaim windows for inactive sessions. Supplied by the host; the
/// defaults are a starting point, not a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// How long a session in any live phase may sit untouched.
    pub idle: Duration,
    /// How long a finished session lingers for final event polls.
    pub finished: Duration,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            idle: Duration::from_secs(30 * 60),
            finished: Duration::from_secs(5 * 60),
        }
    }
}
