pub mod breakpoint;
pub mod components;
pub mod resolver;
pub mod responsive;
pub mod table;
pub mod value;

pub use breakpoint::Breakpoint;
pub use components::{
    build_responsive_grid_classes, grid_classes, join_classes, section_classes, stack_classes,
    GridProps, SectionClasses, SectionProps, StackProps,
};
pub use resolver::{resolve, resolve_direction, ClassToken};
pub use responsive::ResponsiveValue;
pub use table::{ClassTable, ClassTables};
pub use value::{Align, ClassValue, Columns, Direction, Gap};
