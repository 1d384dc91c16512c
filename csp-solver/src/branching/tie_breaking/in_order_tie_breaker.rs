use super::Direction;
use super::TieBreaker;

/// A tie-breaker which selects the first element it receives with the best score according to
/// the provided [`Direction`].
///
/// For example, with [`Direction::Minimum`], if `x2` with score 3 is considered before `x1` with
/// score 3, then `x2` is selected. Since selectors present variables in id order, this makes the
/// selection deterministic.
#[derive(Debug, Clone)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The best element so far, [`None`] if nothing has been considered yet
    selected: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let is_better = match &self.selected {
            None => true,
            Some((_, selected_value)) => match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            },
        };

        if is_better {
            self.selected = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VariableId;

    #[test]
    fn first_of_equal_values_is_selected() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(VariableId::new(0), 10);
        breaker.consider(VariableId::new(1), 10);
        breaker.consider(VariableId::new(2), 10);

        assert_eq!(breaker.select(), Some(VariableId::new(0)));
    }

    #[test]
    fn lowest_value_is_selected() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(VariableId::new(0), 10);
        breaker.consider(VariableId::new(1), 5);
        breaker.consider(VariableId::new(2), 10);

        assert_eq!(breaker.select(), Some(VariableId::new(1)));
    }

    #[test]
    fn highest_value_is_selected_when_maximising() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);

        breaker.consider(VariableId::new(0), 1);
        breaker.consider(VariableId::new(1), 7);
        breaker.consider(VariableId::new(2), 7);

        assert_eq!(breaker.select(), Some(VariableId::new(1)));
    }

    #[test]
    fn select_resets_the_tie_breaker() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);
        breaker.consider(VariableId::new(0), 1);

        assert_eq!(breaker.select(), Some(VariableId::new(0)));
        assert_eq!(breaker.select(), None);
    }
}
