//! Class lists for the layout primitives (`Stack`, `Section`, `Grid`).

use crate::layout::resolver::{resolve, resolve_direction, ClassToken};
use crate::layout::responsive::ResponsiveValue;
use crate::layout::table::{ClassTable, ClassTables};
use crate::layout::value::{Align, Columns, Direction, Gap};
use rustc_hash::FxHashSet;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackProps {
    pub direction: Option<ResponsiveValue<Direction>>,
    pub gap: Option<ResponsiveValue<Gap>>,
    pub align: Option<ResponsiveValue<Align>>,
    pub class_name: Option<String>,
}

impl StackProps {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: impl Into<ResponsiveValue<Direction>>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn gap(mut self, gap: impl Into<ResponsiveValue<Gap>>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn align(mut self, align: impl Into<ResponsiveValue<Align>>) -> Self {
        self.align = Some(align.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// `flex`, then direction (column by default), gap, alignment (center by
/// default) and the caller's own classes.
pub fn stack_classes(props: &StackProps, tables: &ClassTables) -> Vec<ClassToken> {
    let mut classes = vec!["flex".to_string()];

    let direction = props
        .direction
        .clone()
        .unwrap_or(ResponsiveValue::Single(Direction::Column));
    classes.extend(resolve_direction(&direction, &tables.direction));

    if let Some(gap) = &props.gap {
        classes.extend(resolve(gap, &tables.gap));
    }

    classes.extend(align_classes(props.align.as_ref(), &tables.align));

    if let Some(class_name) = &props.class_name {
        classes.push(class_name.clone());
    }

    classes
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProps {
    pub id: String,
    #[serde(default)]
    pub full_width: bool,
    #[serde(default)]
    pub hero: bool,
    pub gap: Option<ResponsiveValue<Gap>>,
    pub align: Option<ResponsiveValue<Align>>,
    pub class_name: Option<String>,
}

impl SectionProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    #[inline]
    pub fn hero(mut self) -> Self {
        self.hero = true;
        self
    }

    pub fn gap(mut self, gap: impl Into<ResponsiveValue<Gap>>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn align(mut self, align: impl Into<ResponsiveValue<Align>>) -> Self {
        self.align = Some(align.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionClasses {
    /// Present only for full-width sections, which break out of the page
    /// container with a coloured wrapper.
    pub wrapper: Option<Vec<ClassToken>>,
    pub section: Vec<ClassToken>,
    pub container: Vec<ClassToken>,
}

pub fn section_classes(props: &SectionProps, tables: &ClassTables) -> SectionClasses {
    let mut section: Vec<ClassToken> = if props.hero {
        vec!["py-16".to_string(), "md:py-25".to_string()]
    } else {
        vec!["py-16".to_string()]
    };
    section.extend(props.class_name.iter().cloned());

    let mut container = vec!["container".to_string()];
    container.extend(align_classes(props.align.as_ref(), &tables.align));
    if let Some(gap) = &props.gap {
        container.push("flex".to_string());
        container.push("flex-col".to_string());
        container.extend(resolve(gap, &tables.gap));
    }

    let wrapper = props.full_width.then(|| {
        let mut wrapper = vec!["bg-primary".to_string()];
        wrapper.extend(props.class_name.iter().cloned());
        wrapper
    });

    SectionClasses {
        wrapper,
        section,
        container,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProps {
    pub columns: Option<ResponsiveValue<Columns>>,
    pub gap: Option<ResponsiveValue<Gap>>,
    pub class_name: Option<String>,
}

impl GridProps {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: impl Into<ResponsiveValue<Columns>>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn gap(mut self, gap: impl Into<ResponsiveValue<Gap>>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Column classes for a grid; no value means no column classes.
pub fn build_responsive_grid_classes(
    value: Option<&ResponsiveValue<Columns>>,
    table: &ClassTable<Columns>,
) -> Vec<ClassToken> {
    value.map(|v| resolve(v, table)).unwrap_or_default()
}

pub fn grid_classes(props: &GridProps, tables: &ClassTables) -> Vec<ClassToken> {
    let mut classes = vec!["grid".to_string()];
    classes.extend(build_responsive_grid_classes(
        props.columns.as_ref(),
        &tables.columns,
    ));
    if let Some(gap) = &props.gap {
        classes.extend(resolve(gap, &tables.gap));
    }
    classes.extend(props.class_name.iter().cloned());
    classes
}

fn align_classes(align: Option<&ResponsiveValue<Align>>, table: &ClassTable<Align>) -> Vec<ClassToken> {
    match align {
        Some(align) => resolve(align, table),
        None => resolve(&ResponsiveValue::Single(Align::Center), table),
    }
}

/// Space-joins tokens, dropping empty ones and repeats of an earlier token.
pub fn join_classes<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    let mut joined = String::new();

    for token in tokens {
        for part in token.as_ref().split_whitespace() {
            if seen.insert(part.to_string()) {
                if !joined.is_empty() {
                    joined.push(' ');
                }
                joined.push_str(part);
            }
        }
    }

    joined
}
