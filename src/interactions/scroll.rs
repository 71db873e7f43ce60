use crate::config;

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

/// A card is revealed once its top edge rises above 1/1.2 of the viewport.
pub fn card_should_reveal(card_top: f64, viewport_height: f64) -> bool {
    card_top < viewport_height / config::CARD_REVEAL_RATIO
}

/// Which service cards have been revealed. Reveals are never revoked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self { revealed: vec![false; len] }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Returns true when the set changed.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    /// Reveals every card whose top edge passed the reveal line.
    pub fn reveal_passed(&mut self, card_tops: &[Option<f64>], viewport_height: f64) -> bool {
        let mut changed = false;
        for (index, top) in card_tops.iter().enumerate() {
            if let Some(top) = top {
                if card_should_reveal(*top, viewport_height) {
                    changed |= self.reveal(index);
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_state_follows_threshold() {
        assert!(header_is_scrolled(150.0));
        assert!(!header_is_scrolled(50.0));
        assert!(!header_is_scrolled(100.0));
    }

    #[test]
    fn cards_reveal_below_fraction_of_viewport() {
        // 1200 / 1.2 = 1000
        assert!(card_should_reveal(999.0, 1200.0));
        assert!(!card_should_reveal(1000.0, 1200.0));
        assert!(card_should_reveal(-300.0, 1200.0));
    }

    #[test]
    fn reveals_are_sticky() {
        let mut cards = RevealSet::new(3);
        assert!(cards.reveal_passed(&[Some(100.0), Some(1500.0), None], 1200.0));
        assert!(cards.is_revealed(0));
        assert!(!cards.is_revealed(1));

        // scrolled back up: card 0 is far below again but stays revealed
        assert!(!cards.reveal_passed(&[Some(5000.0), Some(5000.0), None], 1200.0));
        assert!(cards.is_revealed(0));
        assert!(!cards.is_revealed(1));
    }

    #[test]
    fn reveal_out_of_range_is_ignored() {
        let mut cards = RevealSet::new(1);
        assert!(!cards.reveal(4));
        assert!(cards.reveal(0));
        assert!(!cards.reveal(0));
        assert!(cards.is_revealed(0));
    }
}
