//! Prefix matchers used to classify lines while scanning block documents.
//!
//! A pattern consumes a prefix of the input and returns the rest together with
//! whatever it captured. Tuples of patterns match in sequence.

pub trait Pattern {
    type Output<'a>;
    fn check_pattern<'a>(&mut self, input: &'a str) -> Option<(&'a str, Self::Output<'a>)>;
}

/// Matches only the empty input.
pub struct EofPat;
impl Pattern for EofPat {
    type Output<'a> = ();
    fn check_pattern<'a>(&mut self, input: &'a str) -> Option<(&'a str, Self::Output<'a>)> {
        input.is_empty().then_some(("", ()))
    }
}

/// Greedily consumes characters satisfying the predicate. Never fails.
pub struct OfPred<T: FnMut(char) -> bool>(T);
impl<T: FnMut(char) -> bool> Pattern for OfPred<T> {
    type Output<'a> = &'a str;
    fn check_pattern<'a>(&mut self, input: &'a str) -> Option<(&'a str, Self::Output<'a>)> {
        let i = input
            .char_indices()
            .find(|(_, c)| !(self.0)(*c))
            .map_or_else(|| input.len(), |(i, _)| i);
        let (find, rest) = input.split_at(i);
        Some((rest, find))
    }
}
pub fn of_pred<F: FnMut(char) -> bool>(f: F) -> OfPred<F> {
    OfPred(f)
}

macro_rules! impl_tuple {
    ($($ts:ident . $idx:tt),+) => {
        impl<$($ts: Pattern,)+> Pattern for ($($ts,)+) {
            type Output<'a> = ($($ts::Output<'a>,)+);
            fn check_pattern<'a>(&mut self, input: &'a str) -> Option<(&'a str, Self::Output<'a>)> {
                $(#[allow(non_snake_case)]
                let (input, $ts) = self.$idx.check_pattern(input)?;)+
                Some((input, ($($ts,)+)))
            }
        }
    };
}
impl_tuple!(T1.0, T2.1);
