use crate::layout::breakpoint::{scoped, Breakpoint};
use crate::layout::value::{Align, ClassValue, Columns, Direction, Gap};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::OnceLock;

type Entry = SmallVec<[Cow<'static, str>; 2]>;

/// Lookup from `(breakpoint, value)` to the class tokens the styling build
/// knows about. The `None` row holds the unprefixed base classes.
#[derive(Debug, Clone)]
pub struct ClassTable<V> {
    entries: FxHashMap<(Option<Breakpoint>, V), Entry>,
}

impl<V: ClassValue> Default for ClassTable<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<V: ClassValue> ClassTable<V> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, T>(&mut self, breakpoint: Option<Breakpoint>, value: V, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Cow<'static, str>>,
    {
        self.entries
            .insert((breakpoint, value), tokens.into_iter().map(Into::into).collect());
        self
    }

    #[inline]
    pub fn get(&self, breakpoint: Option<Breakpoint>, value: V) -> Option<&[Cow<'static, str>]> {
        self.entries.get(&(breakpoint, value)).map(|e| e.as_slice())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the table the utility-class build generates for `values`:
    /// every value at the base row and at every breakpoint.
    pub fn generated(values: impl IntoIterator<Item = V>) -> Self {
        let mut table = Self::new();
        for value in values {
            let base = value.fallback_tokens();
            table.insert(None, value, base.iter().cloned());
            for bp in Breakpoint::ALL {
                table.insert(
                    Some(bp),
                    value,
                    base.iter().map(|token| scoped(Some(bp), token)),
                );
            }
        }
        table
    }
}

/// One table per responsive prop.
#[derive(Debug, Clone, Default)]
pub struct ClassTables {
    pub gap: ClassTable<Gap>,
    pub direction: ClassTable<Direction>,
    pub align: ClassTable<Align>,
    pub columns: ClassTable<Columns>,
}

impl ClassTables {
    pub fn tailwind() -> Self {
        Self {
            gap: ClassTable::generated((0..=12).chain([16, 20, 24]).map(Gap)),
            direction: ClassTable::generated([Direction::Row, Direction::Column]),
            align: ClassTable::generated([Align::Start, Align::Center, Align::End]),
            columns: ClassTable::generated((1..=12).map(Columns)),
        }
    }

    /// Process-wide read-only instance of [`ClassTables::tailwind`].
    pub fn global() -> &'static ClassTables {
        static TABLES: OnceLock<ClassTables> = OnceLock::new();
        TABLES.get_or_init(ClassTables::tailwind)
    }
}
