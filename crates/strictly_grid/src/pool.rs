//! Consumable value sets for numeric variants.

use super::Symbol;

/// Per-board record of which values each mark may still write.
///
/// Every value has exactly one owner, fixed at construction. Taking a value
/// removes it from its owner's remaining set; restoring puts it back, which
/// is how undo recovers the set without knowing who wrote the cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePool {
    owners: Vec<(Symbol, Vec<Symbol>)>,
    remaining: Vec<(Symbol, Vec<Symbol>)>,
}

impl ValuePool {
    /// Creates a pool from `(mark, values)` allotments.
    pub fn new(allotments: Vec<(Symbol, Vec<Symbol>)>) -> Self {
        Self {
            remaining: allotments.clone(),
            owners: allotments,
        }
    }

    /// Values `mark` has not used yet, in allotment order.
    pub fn remaining(&self, mark: Symbol) -> &[Symbol] {
        self.remaining
            .iter()
            .find(|(m, _)| *m == mark)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Mark that owns `value`.
    pub fn owner(&self, value: Symbol) -> Option<Symbol> {
        self.owners
            .iter()
            .find(|(_, values)| values.contains(&value))
            .map(|(mark, _)| *mark)
    }

    /// Consumes `value` for `mark`. False when not available to `mark`.
    pub fn take(&mut self, mark: Symbol, value: Symbol) -> bool {
        let Some((_, values)) = self.remaining.iter_mut().find(|(m, _)| *m == mark) else {
            return false;
        };
        match values.iter().position(|&v| v == value) {
            Some(i) => {
                values.remove(i);
                true
            }
            None => false,
        }
    }

    /// True when `value` has an owner and has been taken.
    pub fn is_spent(&self, value: Symbol) -> bool {
        self.owner(value)
            .is_some_and(|owner| !self.remaining(owner).contains(&value))
    }

    /// Returns `value` to its owner. False when unknown or not consumed.
    pub fn restore(&mut self, value: Symbol) -> bool {
        let Some(owner) = self.owner(value) else {
            return false;
        };
        let order: Vec<Symbol> = self
            .owners
            .iter()
            .find(|(m, _)| *m == owner)
            .map(|(_, values)| values.clone())
            .unwrap_or_default();
        let Some((_, values)) = self.remaining.iter_mut().find(|(m, _)| *m == owner) else {
            return false;
        };
        if values.contains(&value) {
            return false;
        }
        values.push(value);
        values.sort_by_key(|v| order.iter().position(|o| o == v));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(ds: &[char]) -> Vec<Symbol> {
        ds.iter().map(|&c| Symbol::new(c)).collect()
    }

    fn pool() -> ValuePool {
        ValuePool::new(vec![
            (Symbol::X, digits(&['1', '3', '5'])),
            (Symbol::O, digits(&['2', '4'])),
        ])
    }

    #[test]
    fn test_take_consumes_once() {
        let mut pool = pool();
        assert!(pool.take(Symbol::X, Symbol::new('3')));
        assert!(!pool.take(Symbol::X, Symbol::new('3')));
        assert!(!pool.take(Symbol::O, Symbol::new('5')));
        assert_eq!(pool.remaining(Symbol::X), digits(&['1', '5']).as_slice());
    }

    #[test]
    fn test_restore_preserves_order() {
        let mut pool = pool();
        pool.take(Symbol::X, Symbol::new('1'));
        pool.take(Symbol::X, Symbol::new('3'));
        assert!(pool.restore(Symbol::new('1')));
        assert!(pool.restore(Symbol::new('3')));
        assert_eq!(pool, self::pool());
    }

    #[test]
    fn test_restore_rejects_unconsumed_or_unknown() {
        let mut pool = pool();
        assert!(!pool.restore(Symbol::new('2')));
        assert!(!pool.restore(Symbol::new('9')));
    }

    #[test]
    fn test_is_spent() {
        let mut pool = pool();
        assert!(!pool.is_spent(Symbol::new('4')));
        pool.take(Symbol::O, Symbol::new('4'));
        assert!(pool.is_spent(Symbol::new('4')));
        assert!(!pool.is_spent(Symbol::new('9')));
    }
}
