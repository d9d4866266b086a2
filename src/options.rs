//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shuffle_iterations(1)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of shuffle passes applied to a new deck.
    ///
    /// One pass is already uniform; more passes change nothing but time.
    pub shuffle_iterations: u32,
    /// Lowest total the dealer stands on. The dealer draws while below it.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle_iterations: 10,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the number of shuffle passes.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_iterations(3);
    /// assert_eq!(options.shuffle_iterations, 3);
    /// ```
    #[must_use]
    pub const fn with_shuffle_iterations(mut self, iterations: u32) -> Self {
        self.shuffle_iterations = iterations;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }
}
