/// The record of every occurrence of a flag, as kept by an [`Accumulator`](crate::Accumulator).
///
/// Inspired by the `Collectable` behaviour of collection parameters: items are only ever added.
pub trait Occurrences: Default + std::fmt::Debug {
    /// Record one occurrence of the flag, along with its argument.
    fn add(&mut self, argument: &str);

    /// The number of occurrences recorded so far.
    fn count(&self) -> usize;

    /// The recorded arguments, in order of occurrence.
    fn values(&self) -> Vec<String>;
}

/// A plain count of occurrences; arguments are dropped on the floor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally(usize);

impl Occurrences for Tally {
    fn add(&mut self, _argument: &str) {
        self.0 += 1;
    }

    fn count(&self) -> usize {
        self.0
    }

    fn values(&self) -> Vec<String> {
        Vec::default()
    }
}

impl Occurrences for Vec<String> {
    fn add(&mut self, argument: &str) {
        self.push(argument.to_string());
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn values(&self) -> Vec<String> {
        self.clone()
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Counting {}
    impl Sealed for super::Collecting {}
}

/// The accumulation mode of an [`Accumulator`](crate::Accumulator), fixed at the type level.
///
/// Only [`Counting`] and [`Collecting`] implement this trait.
pub trait Mode: sealed::Sealed + 'static {
    /// How occurrences are recorded in this mode.
    type Record: Occurrences;

    /// Whether an occurrence of the flag stands alone, without consuming a following token.
    const ARGUMENT_FREE: bool;
}

/// Counting mode: `-v -v -v` is tallied as an intensity of `3`.
#[derive(Debug)]
pub enum Counting {}

impl Mode for Counting {
    type Record = Tally;
    const ARGUMENT_FREE: bool = true;
}

/// Collecting mode: `-t parse -t compile` collects `["parse", "compile"]`.
#[derive(Debug)]
pub enum Collecting {}

impl Mode for Collecting {
    type Record = Vec<String>;
    const ARGUMENT_FREE: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally() {
        let mut record = Tally::default();
        record.add("true");
        record.add("anything");
        assert_eq!(record.count(), 2);
        assert_eq!(record.values(), Vec::<String>::default());
    }

    #[test]
    fn vec() {
        let mut record: Vec<String> = Vec::default();
        record.add("b");
        record.add("a");
        record.add("b");
        assert_eq!(record.count(), 3);
        assert_eq!(record.values(), vec!["b", "a", "b"]);
    }

    #[test]
    fn argument_free() {
        assert!(Counting::ARGUMENT_FREE);
        assert!(!Collecting::ARGUMENT_FREE);
    }
}
