// Integration tests for the pointer topic pipeline

use stacklens::engine::{topics, visualize_pointers, TopicKey};
use stacklens::memory::stack::StackLayout;
use stacklens::memory::{format_address, SLOT_SIZE, STACK_BASE_ADDRESS};
use stacklens::parser::{extract_declarations, extract_prints};
use stacklens::terminal::{simulate_output, ConsoleOutput};

#[test]
fn test_canonical_pointer_round_trip() {
    let decls = extract_declarations("int x = 25; int *ptr = &x;");
    assert_eq!(decls.len(), 2);
    assert!(!decls[0].is_pointer);
    assert!(decls[1].is_pointer);

    let layout = StackLayout::build(&decls);
    let cells = layout.cells();

    assert_eq!(cells[0].name, "x");
    assert_eq!(cells[0].address, STACK_BASE_ADDRESS);
    assert_eq!(cells[0].display_value, "25");
    assert_eq!(cells[0].points_to_address, None);
    assert_eq!(cells[0].size_bytes, 4);

    assert_eq!(cells[1].name, "ptr");
    assert_eq!(cells[1].points_to_address, Some(cells[0].address));
    assert_eq!(cells[1].display_value, "→ 0x7fff5fbff8c0");
    assert_eq!(cells[1].size_bytes, 8);
    assert_eq!(layout.target_of(&cells[1]).map(|c| c.name.as_str()), Some("x"));
}

#[test]
fn test_addresses_increase_by_slot_size() {
    let source = r#"
        char c = 'a';
        int n = 7;
        long big = 1234567;
        int *p = &n;
        double d = 2.5;
    "#;
    let layout = StackLayout::build(&extract_declarations(source));
    let cells = layout.cells();

    assert_eq!(cells.len(), 5);
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.address, cells[0].address + SLOT_SIZE * i as u64);
    }
    for pair in cells.windows(2) {
        assert_eq!(pair[1].address - pair[0].address, 8);
    }

    // Sizes do not affect spacing
    let sizes: Vec<usize> = cells.iter().map(|c| c.size_bytes).collect();
    assert_eq!(sizes, vec![8, 4, 8, 8, 8]);
}

#[test]
fn test_pointer_targets_previous_slot() {
    let source = "int a = 1; int b = 2; int *pb = &b; int *ppb = &pb;";
    let layout = StackLayout::build(&extract_declarations(source));
    let cells = layout.cells();

    for (i, cell) in cells.iter().enumerate().skip(1) {
        if cell.is_pointer {
            assert_eq!(cell.points_to_address, Some(cells[i - 1].address));
        }
    }
    assert_eq!(layout.target_of(&cells[3]).map(|c| c.name.as_str()), Some("pb"));
}

#[test]
fn test_first_pointer_targets_unassigned_slot() {
    let layout = StackLayout::build(&extract_declarations("int *p = NULL; int x = 3;"));
    let first = &layout.cells()[0];

    assert_eq!(first.points_to_address, Some(STACK_BASE_ADDRESS - 8));
    assert_eq!(first.display_value, format!("→ {}", format_address(STACK_BASE_ADDRESS - 8)));
    assert!(layout.target_of(first).is_none());
    assert!(layout.cell_at(STACK_BASE_ADDRESS - 8).is_none());
}

#[test]
fn test_builder_is_pure() {
    let decls = extract_declarations(topics::lookup(TopicKey::Pointers).default_source);

    assert_eq!(StackLayout::build(&decls), StackLayout::build(&decls));
    assert!(StackLayout::build(&[]).is_empty());
}

#[test]
fn test_slots_wrap_at_top_of_address_space() {
    let decls = extract_declarations("int a = 1; int b = 2; int *pb = &b;");
    let layout = StackLayout::build_at(u64::MAX - 8, &decls);
    let cells = layout.cells();

    assert_eq!(cells[0].address, u64::MAX - 8);
    assert_eq!(cells[1].address, u64::MAX);
    assert_eq!(cells[2].address, 7);
    assert_eq!(layout.target_of(&cells[2]).map(|c| c.name.as_str()), Some("b"));
}

#[test]
fn test_no_prints_is_distinct_from_empty_output() {
    let decls = extract_declarations("int x = 1;");
    let none = simulate_output(&extract_prints("int x = 1;"), &decls);
    assert_eq!(none, ConsoleOutput::NoOutputDetected);
    assert_eq!(none.text(), None);
    assert!(!none.is_detected());

    let blank = simulate_output(&extract_prints(r#"printf("\n"); printf("\n");"#), &decls);
    assert_eq!(blank, ConsoleOutput::Lines(vec![String::new(), String::new()]));
    assert_eq!(blank.text().as_deref(), Some("\n\n"));
}

#[test]
fn test_declared_name_replaced_by_initializer() {
    let source = r#"
        int total = a + b;
        printf("total is %d\n", total);
    "#;
    let output = simulate_output(&extract_prints(source), &extract_declarations(source));

    assert_eq!(output, ConsoleOutput::Lines(vec!["a + b is %d".to_string()]));
}

#[test]
fn test_default_pointer_topic() {
    let vis = visualize_pointers(topics::lookup(TopicKey::Pointers).default_source);

    assert_eq!(vis.layout.len(), 2);
    assert_eq!(vis.declarations[0].location.line, 4);
    assert_eq!(
        vis.output.display_lines(),
        vec![
            "Value of 25: %d",
            "Address of 25: %p",
            "Pointer &x: %p",
            "Dereferenced &x: %d",
        ]
    );
}

#[test]
fn test_embedded_newlines_split_for_display() {
    let source = r#"printf("one\ntwo\tthree\n");"#;
    let output = simulate_output(&extract_prints(source), &[]);

    assert_eq!(output, ConsoleOutput::Lines(vec!["one\ntwo\tthree".to_string()]));
    assert_eq!(output.display_lines(), vec!["one", "two\tthree"]);
}

#[test]
fn test_garbage_input_degrades_to_empty() {
    let vis = visualize_pointers("}{ ;; = = * int * = ; printf( )\"");

    assert!(vis.declarations.is_empty());
    assert!(vis.layout.is_empty());
    assert_eq!(vis.output, ConsoleOutput::NoOutputDetected);
}
