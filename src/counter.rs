//! The bounded serving counter: advance one at a time up to the last
//! ticket number, reset back to the first.

use crate::config::Config;

pub const FIRST_NUMBER: u8 = 1;
pub const LAST_NUMBER: u8 = 50;

impl Config {
    /// Moves on to the next number, returning it so the caller can look
    /// up its sound. At the last number this is a no-op and returns
    /// `None`, letting the caller skip the redundant save.
    pub fn advance(&mut self) -> Option<u8> {
        if self.current_number < LAST_NUMBER {
            self.current_number += 1;
            Some(self.current_number)
        } else {
            None
        }
    }

    /// Puts the counter back to the first number unconditionally.
    pub fn reset(&mut self) {
        self.current_number = FIRST_NUMBER;
    }
}
