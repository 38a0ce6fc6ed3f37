//! Tests for table rendering functionality.

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use boxtable_utils_string::{WidthMode, display_width};
    use serde::Serialize;
    use serde_json::json;

    use crate::error::TableError;
    use crate::table::utils::{align_text, value_text, value_to_lines};
    use crate::table::{
        Alignment, AsciiDecorator, BlankDecorator, Decorator, DisplayKeys, Key, Row, TextTable,
    };

    fn people() -> TextTable {
        TextTable::from_json(json!([
            {"name": "Al", "age": "30"},
            {"name": "Bo", "age": "7"},
        ]))
    }

    fn assert_rectangular(lines: &[String]) {
        let widths: Vec<usize> = lines.iter().map(|l| display_width(l)).collect();
        assert!(
            widths.windows(2).all(|w| w[0] == w[1]),
            "uneven line widths {:?} in {:#?}",
            widths,
            lines
        );
    }

    #[test]
    fn test_people_table() {
        let lines = people().lines().unwrap();
        assert_eq!(
            lines,
            vec![
                "┌──────┬─────┐",
                "│ NAME │ AGE │",
                "├──────┼─────┤",
                "│ Al   │ 30  │",
                "│ Bo   │ 7   │",
                "└──────┴─────┘",
            ]
        );
        assert_rectangular(&lines);
    }

    #[test]
    fn test_render_joins_with_trailing_terminator() {
        let table = people();
        let output = table.render().unwrap();
        let expected: String = table
            .lines()
            .unwrap()
            .iter()
            .map(|line| format!("{}{}", line, crate::table::LINE_ENDING))
            .collect();
        assert_eq!(output, expected);
        assert!(output.ends_with(crate::table::LINE_ENDING));
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = people().with_formatter(|_row, _key, value| {
            Ok::<_, Infallible>(format!("<{}>", value_text(value)))
        });
        assert_eq!(table.render().unwrap(), table.render().unwrap());
        assert_eq!(format!("{}", table), table.render().unwrap());
    }

    #[test]
    fn test_multiline_cell_expands_row() {
        let table = TextTable::from_json(json!([{"a": "x\ny", "b": "z"}]));
        let lines = table.lines().unwrap();
        assert_eq!(
            lines,
            vec![
                "┌───┬───┐",
                "│ A │ B │",
                "├───┼───┤",
                "│ x │ z │",
                "│ y │   │",
                "└───┴───┘",
            ]
        );
    }

    #[test]
    fn test_wide_glyphs_are_not_truncated() {
        let table = TextTable::from_json(json!([{"w": "日本語"}]));
        let lines = table.lines().unwrap();
        assert_eq!(
            lines,
            vec![
                "┌────────┐",
                "│   W    │",
                "├────────┤",
                "│ 日本語 │",
                "└────────┘",
            ]
        );
        assert_rectangular(&lines);
    }

    #[test]
    fn test_positional_rows_hide_header() {
        let table = TextTable::from_json(json!([["a", "bb"], ["ccc"]])).with_decorator(AsciiDecorator);
        assert_eq!(
            table.lines().unwrap(),
            vec!["+-----+----+", "| a   | bb |", "| ccc |    |", "+-----+----+"]
        );
    }

    #[test]
    fn test_auto_header_with_named_key() {
        let table = TextTable::from_json(json!([["a"], {"name": "x"}])).with_decorator(AsciiDecorator);
        let lines = table.lines().unwrap();
        assert_eq!(lines[1], "| 0 | NAME |");
        assert_eq!(lines.len(), 6);
        assert_rectangular(&lines);
    }

    #[test]
    fn test_integer_object_keys_are_positional() {
        let table = TextTable::from_json(json!([{"0": "a", "1": "b"}]));
        let prepared = table.prepare().unwrap();
        let keys: Vec<Key> = prepared.keys().cloned().collect();
        assert_eq!(keys, vec![Key::Index(0), Key::Index(1)]);
        assert_eq!(table.lines().unwrap().len(), 3);
    }

    #[test]
    fn test_negative_integer_keys_are_positional() {
        let table = TextTable::from_json(json!([{"-1": "x", "0": "y"}]));
        let keys: Vec<Key> = table.prepare().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![Key::Index(-1), Key::Index(0)]);
        assert_eq!(table.lines().unwrap(), vec!["┌────┬───┐", "│ x  │ y │", "└────┴───┘"]);
    }

    #[test]
    fn test_explicit_display_keys() {
        let positional = TextTable::from_json(json!([["a"]])).with_display_keys(true);
        assert_eq!(positional.lines().unwrap()[1], "│ 0 │");

        let named = people().with_display_keys(DisplayKeys::Never);
        assert_eq!(named.lines().unwrap().len(), 4);
    }

    #[test]
    fn test_empty_table() {
        let table = TextTable::new();
        assert_eq!(table.lines().unwrap(), vec!["┌┐", "└┘"]);

        let table = TextTable::new().with_display_keys(true);
        assert_eq!(table.lines().unwrap(), vec!["┌┐", "││", "├┤", "└┘"]);
    }

    #[test]
    fn test_rows_without_cells() {
        let table = TextTable::from_json(json!([{}, []]));
        assert_eq!(table.lines().unwrap(), vec!["┌┐", "││", "││", "└┘"]);
    }

    #[test]
    fn test_missing_cells_render_blank() {
        let table = TextTable::from_json(json!([{"b": 1, "a": 2}, {"c": 3}]));
        let lines = table.lines().unwrap();
        assert_eq!(lines[1], "│ B │ A │ C │");
        assert_eq!(lines[3], "│ 1 │ 2 │   │");
        assert_eq!(lines[4], "│   │   │ 3 │");
    }

    #[test]
    fn test_alignments_and_indentation() {
        let table = TextTable::from_json(json!([{"id": "1"}, {"id": "12345"}]))
            .with_keys_alignment(Alignment::Left)
            .with_values_alignment(Alignment::Right)
            .with_upper_keys(false)
            .with_indentation("  ");
        assert_eq!(
            table.lines().unwrap(),
            vec![
                "  ┌───────┐",
                "  │ id    │",
                "  ├───────┤",
                "  │     1 │",
                "  │ 12345 │",
                "  └───────┘",
            ]
        );
    }

    #[test]
    fn test_center_tie_break_in_table() {
        let table = TextTable::from_json(json!([{"ab": "abcde"}])).with_upper_keys(false);
        assert_eq!(table.lines().unwrap()[1], "│  ab   │");
    }

    #[test]
    fn test_skipped_rows_are_counted() {
        let table = TextTable::from_json(json!([{"a": 1}, 3, "x", [1], null]));
        assert_eq!(table.data().len(), 2);
        assert_eq!(table.skipped_rows(), 3);

        let table = TextTable::from_json(json!("just text"));
        assert!(table.data().is_empty());
        assert_eq!(table.skipped_rows(), 1);
        assert_eq!(table.lines().unwrap(), vec!["┌┐", "└┘"]);
    }

    #[test]
    fn test_object_of_rows() {
        let table = TextTable::from_json(json!({
            "r1": {"name": "Al"},
            "r2": {"name": "Bo"},
            "r3": 7,
        }));
        assert_eq!(table.data().len(), 2);
        assert_eq!(table.skipped_rows(), 1);
        assert_eq!(
            table.lines().unwrap(),
            vec![
                "┌──────┐",
                "│ NAME │",
                "├──────┤",
                "│ Al   │",
                "│ Bo   │",
                "└──────┘",
            ]
        );
    }

    #[test]
    fn test_name_and_index_keys_stay_distinct() {
        let table = TextTable::from_rows(vec![
            Row::new().with_cell(Key::name("3"), "a").with_cell(Key::Index(3), "b"),
        ])
        .with_display_keys(true);
        assert_eq!(table.prepare().unwrap().num_columns(), 2);
        assert_eq!(table.lines().unwrap()[1], "│ 3 │ 3 │");
        assert_eq!(Key::from("3"), Key::Index(3));
    }

    #[test]
    fn test_unformatted_values() {
        let table = TextTable::from_json(json!([
            {"n": 1.5, "b": true, "z": null, "l": [1, 2], "o": {"k": "v"}}
        ]))
        .with_display_keys(false);
        assert_eq!(
            table.lines().unwrap()[1],
            "│ 1.5 │ true │   │   │   │"
        );
    }

    #[test]
    fn test_formatter_sees_whole_row() {
        let table = people().with_formatter(|row, key, value| {
            let text = value_text(value);
            if key == &Key::from("name") {
                let age = row.get(&Key::from("age")).map(value_text).unwrap_or_default();
                Ok::<_, Infallible>(format!("{} ({})", text, age))
            } else {
                Ok(text.into_owned())
            }
        });
        let lines = table.lines().unwrap();
        assert_eq!(lines[3], "│ Al (30) │ 30  │");
        assert_eq!(lines[4], "│ Bo (7)  │ 7   │");
        assert_eq!(table.data()[0].get(&Key::from("name")), Some(&json!("Al")));
    }

    #[test]
    fn test_formatter_error_aborts_render() {
        let table = people().with_formatter(|_row, key, _value| {
            if key == &Key::from("age") {
                Err(format!("cannot format {}", key))
            } else {
                Ok("ok".to_string())
            }
        });
        let err = table.render().unwrap_err();
        assert!(matches!(err, TableError::Formatter(_)));
        assert_eq!(err.to_string(), "cannot format age");
    }

    #[test]
    fn test_clear_formatter() {
        let mut table = people().with_formatter(|_row, _key, _value| Ok::<_, Infallible>("-".to_string()));
        assert!(table.formatter().is_some());
        table.clear_formatter();
        assert_eq!(table.render().unwrap(), people().render().unwrap());
    }

    #[derive(Serialize)]
    struct Person {
        name: &'static str,
        age: u32,
    }

    #[test]
    fn test_records() {
        let table = TextTable::from_records(&[
            Person { name: "Al", age: 30 },
            Person { name: "Bo", age: 7 },
        ])
        .unwrap();
        assert_eq!(table.render().unwrap(), people().render().unwrap());

        let table = TextTable::from_records(&["not", "rows"]).unwrap();
        assert_eq!(table.skipped_rows(), 2);
    }

    #[test]
    fn test_row_adapters() {
        let record = Row::from_record(&Person { name: "Al", age: 30 }).unwrap().unwrap();
        let keys: Vec<&Key> = record.keys().collect();
        assert_eq!(keys, vec![&Key::from("name"), &Key::from("age")]);

        assert!(Row::from_record(&"scalar").unwrap().is_none());

        let collected: Row = vec![("name", "Al"), ("age", "30")].into_iter().collect();
        assert_eq!(collected, Row::from_json(json!({"name": "Al", "age": "30"})).unwrap());
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_render_data_replaces_rows() {
        let mut table = people().with_decorator(AsciiDecorator);
        let output = table
            .render_data(vec![Row::new().with_cell("k", "v")])
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["+---+", "| K |", "+---+", "| v |", "+---+"]);
    }

    #[test]
    fn test_blank_decorator_keeps_layout() {
        let lines = people().with_decorator(BlankDecorator).lines().unwrap();
        assert_eq!(lines[1], "  NAME   AGE  ");
        assert_rectangular(&lines);
    }

    #[derive(Debug)]
    struct Stars;

    impl Decorator for Stars {
        fn top_left(&self) -> &str {
            "*"
        }
        fn top_right(&self) -> &str {
            "*"
        }
        fn bottom_left(&self) -> &str {
            "*"
        }
        fn bottom_right(&self) -> &str {
            "*"
        }
        fn horizontal(&self) -> &str {
            "*"
        }
        fn vertical(&self) -> &str {
            "*"
        }
        fn cross(&self) -> &str {
            "*"
        }
        fn vertical_left(&self) -> &str {
            "*"
        }
        fn vertical_right(&self) -> &str {
            "*"
        }
        fn horizontal_up(&self) -> &str {
            "*"
        }
        fn horizontal_down(&self) -> &str {
            "*"
        }
    }

    #[test]
    fn test_custom_decorator() {
        let lines = people().with_decorator(Stars).lines().unwrap();
        assert_eq!(lines[0], "**************");
        assert_eq!(lines[1], "* NAME * AGE *");
    }

    #[test]
    fn test_unicode_width_mode() {
        let table = TextTable::from_json(json!([{"e": "e\u{301}"}])).with_width_mode(WidthMode::Unicode);
        let lines = table.lines().unwrap();
        assert_eq!(lines[0], "┌───┐");
        assert_eq!(lines[3], "│ e\u{301} │");
    }

    #[test]
    fn test_alignment() {
        let mode = WidthMode::Scripts;
        assert_eq!(align_text("Hi", 6, Alignment::Left, mode), "Hi    ");
        assert_eq!(align_text("Hi", 6, Alignment::Right, mode), "    Hi");
        assert_eq!(align_text("Hi", 6, Alignment::Center, mode), "  Hi  ");
        assert_eq!(align_text("ab", 5, Alignment::Center, mode), " ab  ");
        assert_eq!(align_text("你好", 6, Alignment::Center, mode), " 你好 ");
    }

    #[test]
    fn test_alignment_never_truncates() {
        let mode = WidthMode::Scripts;
        assert_eq!(align_text("Hello", 3, Alignment::Left, mode), "Hello");
        assert_eq!(align_text("日本語", 4, Alignment::Right, mode), "日本語");
        assert_eq!(align_text("", 0, Alignment::Center, mode), "");
    }

    #[test]
    fn test_value_to_lines() {
        assert_eq!(value_to_lines(""), vec![""]);
        assert_eq!(value_to_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(value_to_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!("Center".parse::<Alignment>().unwrap(), Alignment::Center);
        assert!(matches!(
            "middle".parse::<Alignment>(),
            Err(TableError::InvalidAlignment(_))
        ));
        assert_eq!("auto".parse::<DisplayKeys>().unwrap(), DisplayKeys::Auto);
        assert_eq!("false".parse::<DisplayKeys>().unwrap(), DisplayKeys::Never);
        assert!(matches!(
            "maybe".parse::<DisplayKeys>(),
            Err(TableError::InvalidDisplayKeys(_))
        ));
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("0"), Key::Index(0));
        assert_eq!(Key::parse("42"), Key::Index(42));
        assert_eq!(Key::parse("007"), Key::Name("007".to_string()));
        assert_eq!(Key::parse("-1"), Key::Index(-1));
        assert_eq!(Key::parse("-0"), Key::Name("-0".to_string()));
        assert_eq!(Key::parse("-"), Key::Name("-".to_string()));
        assert_eq!(Key::parse("99999999999999999999"), Key::Name("99999999999999999999".to_string()));
        assert_eq!(Key::parse(""), Key::Name(String::new()));
        assert_eq!(Key::name("3"), Key::Name("3".to_string()));
        assert_eq!(Key::Index(3).label(), "3");
    }
}
