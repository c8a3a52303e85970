//! In-flight request bookkeeping.

/// Monotonic ticket counter for racing async fetches.
///
/// Each fetch takes a ticket with [`RequestSequence::begin`]; when its
/// response arrives it only commits if its ticket is still the newest. A
/// slow response from an earlier request can never overwrite the result of
/// a later one.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier tickets.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether the given ticket is still the most recent request.
    ///
    /// `begin` never issues 0, so 0 is never current; a defaulted or
    /// uninitialized ticket cannot commit a response.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket != 0 && ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let mut sequence = RequestSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();

        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn a_later_begin_invalidates_everything_before_it() {
        let mut sequence = RequestSequence::new();
        let tickets: Vec<u64> = (0..5).map(|_| sequence.begin()).collect();

        for stale in &tickets[..4] {
            assert!(!sequence.is_current(*stale));
        }
        assert!(sequence.is_current(tickets[4]));
    }

    #[test]
    fn no_ticket_is_current_before_the_first_begin() {
        let sequence = RequestSequence::new();
        assert!(!sequence.is_current(0));
        assert!(!sequence.is_current(1));
    }

    #[test]
    fn the_zero_ticket_is_never_current() {
        // begin() never issues 0, so a defaulted ticket must not commit.
        let mut sequence = RequestSequence::new();
        assert!(!sequence.is_current(0));
        sequence.begin();
        assert!(!sequence.is_current(0));
    }
}
