//! # Optimistic favorite toggle
//!
//! A click flips the shown state at once and sends one request. Server
//! answers never flip it again; a failure only reverts the click that caused
//! it, and only if no later click happened since. Two clicks therefore land
//! back on the starting state whatever order the answers arrive in.

/// Identifies one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FavoriteToggle {
    shown: bool,
    generation: u64,
}

impl FavoriteToggle {
    pub fn new(is_favorite: bool) -> Self {
        Self { shown: is_favorite, generation: 0 }
    }

    pub fn is_favorite(&self) -> bool {
        self.shown
    }

    /// Flip the shown state for a click.
    pub fn flip(&mut self) -> Ticket {
        self.shown = !self.shown;
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Record the outcome of the request sent for `ticket`. Returns whether
    /// the shown state was reverted.
    pub fn settle(&mut self, ticket: Ticket, ok: bool) -> bool {
        if ok || ticket.0 != self.generation {
            return false;
        }
        self.shown = !self.shown;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_any_order() {
        for start in [false, true] {
            for outcomes in [(true, true), (true, false), (false, true), (false, false)] {
                for second_first in [false, true] {
                    let mut fav = FavoriteToggle::new(start);
                    let a = fav.flip();
                    let b = fav.flip();
                    if second_first {
                        fav.settle(b, outcomes.1);
                        fav.settle(a, outcomes.0);
                    } else {
                        fav.settle(a, outcomes.0);
                        fav.settle(b, outcomes.1);
                    }
                    // a failed second click reverts to the state after the first
                    let expected = if outcomes.1 { start } else { !start };
                    assert_eq!(fav.is_favorite(), expected, "start={start} outcomes={outcomes:?}");
                }
            }
        }
    }

    #[test]
    fn test_successful_double_toggle_restores_state() {
        let mut fav = FavoriteToggle::new(false);
        let a = fav.flip();
        let b = fav.flip();
        assert!(!fav.settle(b, true));
        assert!(!fav.settle(a, true));
        assert!(!fav.is_favorite());
    }

    #[test]
    fn test_single_failure_reverts() {
        let mut fav = FavoriteToggle::new(false);
        let t = fav.flip();
        assert!(fav.is_favorite());
        assert!(fav.settle(t, false));
        assert!(!fav.is_favorite());
    }
}
