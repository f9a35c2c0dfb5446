use crate::layout::breakpoint::{scoped, Breakpoint};
use crate::layout::responsive::ResponsiveValue;
use crate::layout::table::ClassTable;
use crate::layout::value::{ClassValue, Direction};

pub type ClassToken = String;

/// Resolves a responsive prop into class tokens, mobile first.
///
/// A per-breakpoint value emits its smallest breakpoint unprefixed, then a
/// prefixed token for every larger breakpoint that is explicitly set. Values
/// missing from `table` fall back to [`ClassValue::fallback_tokens`].
pub fn resolve<V: ClassValue>(value: &ResponsiveValue<V>, table: &ClassTable<V>) -> Vec<ClassToken> {
    resolve_with(value, table, |_, _, _| {})
}

/// Like [`resolve`], with `items-center` after every row-oriented token at
/// the same breakpoint.
pub fn resolve_direction(
    value: &ResponsiveValue<Direction>,
    table: &ClassTable<Direction>,
) -> Vec<ClassToken> {
    resolve_with(value, table, |breakpoint, direction, tokens| {
        if direction == Direction::Row {
            tokens.push(scoped(breakpoint, "items-center"));
        }
    })
}

fn resolve_with<V, F>(value: &ResponsiveValue<V>, table: &ClassTable<V>, mut companion: F) -> Vec<ClassToken>
where
    V: ClassValue,
    F: FnMut(Option<Breakpoint>, V, &mut Vec<ClassToken>),
{
    let mut tokens = Vec::new();

    match value {
        ResponsiveValue::Single(single) => {
            push_tokens(&mut tokens, table, None, *single);
            companion(None, *single, &mut tokens);
        }
        ResponsiveValue::PerBreakpoint(map) => {
            let base = map.values().next().copied().unwrap_or_else(V::default_value);
            push_tokens(&mut tokens, table, None, base);
            companion(None, base, &mut tokens);

            // The base entry is the first in ascending order.
            for (bp, override_value) in map.iter().skip(1) {
                push_tokens(&mut tokens, table, Some(*bp), *override_value);
                companion(Some(*bp), *override_value, &mut tokens);
            }
        }
    }

    tokens
}

fn push_tokens<V: ClassValue>(
    tokens: &mut Vec<ClassToken>,
    table: &ClassTable<V>,
    breakpoint: Option<Breakpoint>,
    value: V,
) {
    match table.get(breakpoint, value) {
        Some(entry) => tokens.extend(entry.iter().map(|token| token.to_string())),
        None => tokens.extend(
            value
                .fallback_tokens()
                .iter()
                .map(|token| scoped(breakpoint, token)),
        ),
    }
}
