use supafox_web::layout::{
    grid_classes, join_classes, resolve, resolve_direction, section_classes, stack_classes, Align,
    Breakpoint, ClassTable, ClassTables, Columns, Direction, Gap, GridProps, ResponsiveValue,
    SectionProps, StackProps,
};

fn tables() -> ClassTables {
    ClassTables::tailwind()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_value_is_unprefixed() {
        let tables = tables();
        assert_eq!(resolve(&ResponsiveValue::Single(Gap(4)), &tables.gap), vec!["gap-4"]);
        assert_eq!(
            resolve(&ResponsiveValue::Single(Align::Start), &tables.align),
            vec!["items-start", "text-left"]
        );
    }

    #[test]
    fn test_smallest_breakpoint_becomes_base() {
        let value = ResponsiveValue::per_breakpoint([(Breakpoint::Md, Gap(4)), (Breakpoint::Lg, Gap(8))]);
        assert_eq!(resolve(&value, &tables().gap), vec!["gap-4", "lg:gap-8"]);
    }

    #[test]
    fn test_breakpoint_order_ignores_insertion_order() {
        let value = ResponsiveValue::per_breakpoint([
            (Breakpoint::Xxl, Columns(4)),
            (Breakpoint::Sm, Columns(1)),
            (Breakpoint::Lg, Columns(3)),
        ]);
        assert_eq!(
            resolve(&value, &tables().columns),
            vec!["grid-cols-1", "lg:grid-cols-3", "2xl:grid-cols-4"]
        );
    }

    #[test]
    fn test_row_direction_gets_companion() {
        let tables = tables();
        assert_eq!(
            resolve_direction(&ResponsiveValue::Single(Direction::Row), &tables.direction),
            vec!["flex-row", "items-center"]
        );

        let value = ResponsiveValue::per_breakpoint([
            (Breakpoint::Sm, Direction::Column),
            (Breakpoint::Md, Direction::Row),
        ]);
        assert_eq!(
            resolve_direction(&value, &tables.direction),
            vec!["flex-col", "md:flex-row", "md:items-center"]
        );
    }

    #[test]
    fn test_table_entries_take_precedence() {
        let mut table = ClassTable::new();
        table.insert(None, Gap(3), ["gap-[0.75rem]"]);
        table.insert(Some(Breakpoint::Md), Gap(5), ["md:gap-[1.25rem]"]);

        let value = ResponsiveValue::per_breakpoint([
            (Breakpoint::Sm, Gap(3)),
            (Breakpoint::Md, Gap(5)),
            (Breakpoint::Xl, Gap(7)),
        ]);
        assert_eq!(
            resolve(&value, &table),
            vec!["gap-[0.75rem]", "md:gap-[1.25rem]", "xl:gap-7"]
        );
    }

    #[test]
    fn test_responsive_value_deserializes_both_shapes() {
        let single: ResponsiveValue<Gap> = serde_json::from_str("4").unwrap();
        assert_eq!(single, ResponsiveValue::Single(Gap(4)));

        let map: ResponsiveValue<Gap> = serde_json::from_str(r#"{"lg": 8, "2xl": 12}"#).unwrap();
        assert_eq!(map.get(Breakpoint::Xxl), Some(&Gap(12)));
        assert_eq!(map.base(), Some((Breakpoint::Lg, &Gap(8))));

        let props: StackProps =
            serde_json::from_str(r#"{"direction": {"sm": "column", "md": "row"}, "gap": 2}"#).unwrap();
        assert_eq!(props.gap, Some(ResponsiveValue::Single(Gap(2))));
    }

    #[test]
    fn test_stack_defaults() {
        let classes = stack_classes(&StackProps::new(), &tables());
        assert_eq!(classes, vec!["flex", "flex-col", "items-center", "text-center"]);
    }

    #[test]
    fn test_stack_full_props() {
        let props = StackProps::new()
            .direction(Direction::Row)
            .gap(Gap(4))
            .align(Align::End)
            .class_name("w-full");
        assert_eq!(
            join_classes(stack_classes(&props, &tables())),
            "flex flex-row items-center gap-4 items-end text-right w-full"
        );
    }

    #[test]
    fn test_section_variants() {
        let tables = tables();

        let plain = section_classes(&SectionProps::new("about"), &tables);
        assert!(plain.wrapper.is_none());
        assert_eq!(plain.section, vec!["py-16"]);
        assert_eq!(plain.container, vec!["container", "items-center", "text-center"]);

        let hero = section_classes(
            &SectionProps::new("hero")
                .hero()
                .full_width()
                .gap(Gap(8))
                .class_name("bg-card"),
            &tables,
        );
        assert_eq!(hero.section, vec!["py-16", "md:py-25", "bg-card"]);
        assert_eq!(hero.wrapper, Some(vec!["bg-primary".to_string(), "bg-card".to_string()]));
        assert_eq!(
            hero.container,
            vec!["container", "items-center", "text-center", "flex", "flex-col", "gap-8"]
        );
    }

    #[test]
    fn test_grid_classes() {
        let props = GridProps::new()
            .columns(ResponsiveValue::per_breakpoint([
                (Breakpoint::Sm, Columns(1)),
                (Breakpoint::Md, Columns(2)),
            ]))
            .gap(Gap(4));
        assert_eq!(
            grid_classes(&props, &tables()),
            vec!["grid", "grid-cols-1", "md:grid-cols-2", "gap-4"]
        );
        assert_eq!(grid_classes(&GridProps::new(), &tables()), vec!["grid"]);
    }

    #[test]
    fn test_join_classes_drops_duplicates() {
        assert_eq!(
            join_classes(["flex", "items-center", "", "gap-2 items-center", "flex"]),
            "flex items-center gap-2"
        );
    }

    fn breakpoint() -> impl Strategy<Value = Breakpoint> {
        prop::sample::select(Breakpoint::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_resolution_is_idempotent(entries in prop::collection::vec((breakpoint(), 0u16..30), 0..6)) {
            let value = ResponsiveValue::per_breakpoint(entries.into_iter().map(|(bp, n)| (bp, Gap(n))));
            let tables = ClassTables::global();
            prop_assert_eq!(resolve(&value, &tables.gap), resolve(&value, &tables.gap));
        }

        #[test]
        fn prop_only_larger_breakpoints_are_prefixed(entries in prop::collection::vec((breakpoint(), 0u16..30), 1..6)) {
            let value = ResponsiveValue::per_breakpoint(entries.into_iter().map(|(bp, n)| (bp, Gap(n))));
            let (base, _) = value.base().unwrap();
            let tokens = resolve(&value, &ClassTable::new());

            prop_assert!(!tokens[0].contains(':'));
            for token in &tokens[1..] {
                let prefix = token.split(':').next().unwrap();
                let bp = Breakpoint::ALL.iter().find(|bp| bp.as_str() == prefix).unwrap();
                prop_assert!(*bp > base);
            }
        }
    }
}
