use screenplay_writer::models::{Conf, Margins, PrintProfile};
use screenplay_writer::pdf::{LayoutEngine, Liner};
use screenplay_writer::utils::prepare_lines;
use std::fs;

const EPSILON: f64 = 1e-9;

fn sample() -> String {
    fs::read_to_string("tests/test_data/sample.txt").expect("无法读取测试文件")
}

fn long_script() -> String {
    let mut lines = Vec::new();
    for i in 0..40 {
        lines.push(format!("INT. ROOM {} - DAY", i));
        lines.push(String::new());
        lines.push("                     JOHN".to_string());
        lines.push(format!(
            "         This is a rather long line of dialogue number {} that has to wrap onto the next line.",
            i
        ));
        lines.push("\tTabbed action line.".to_string());
    }
    lines.join("\r\n")
}

#[test]
fn test_layout_is_idempotent() {
    let engine = LayoutEngine::new(&Conf::default());
    let script = long_script();
    let first = engine.layout(&script);
    let second = engine.layout(&script);
    assert_eq!(first, second);
    assert_eq!(
        LayoutEngine::new(&Conf::default()).layout(&script),
        first
    );
}

#[test]
fn test_no_line_below_bottom_margin() {
    let conf = Conf::default();
    let profile = &conf.print_profile;
    let layout = LayoutEngine::new(&conf).layout(&long_script());
    let max_y = profile.page_height - profile.margins.bottom - layout.line_height;

    assert!(layout.page_count > 1);
    for cmd in &layout.commands {
        assert!(cmd.y <= max_y + EPSILON, "越界: {:?}", cmd);
        assert!(cmd.y >= profile.margins.top - EPSILON);
        assert_eq!(cmd.x, profile.margins.left);
        assert!(cmd.page >= 1 && cmd.page <= layout.page_count);
    }
}

#[test]
fn test_sub_line_count_matches_wrap() {
    let conf = Conf::default();
    let script = long_script();
    let liner = Liner::from_profile(&conf.print_profile);
    let expected: usize = prepare_lines(&script, conf.tab_width)
        .iter()
        .map(|line| liner.wrap_line(line).len())
        .sum();

    let layout = LayoutEngine::new(&conf).layout(&script);
    assert_eq!(layout.commands.len(), expected);
    // 5 行一组，对白折成两行
    assert_eq!(expected, 40 * 6);
}

#[test]
fn test_pages_and_rows_are_monotonic() {
    let layout = LayoutEngine::new(&Conf::default()).layout(&long_script());
    for pair in layout.commands.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.page == b.page {
            assert!((b.y - a.y - layout.line_height).abs() < EPSILON);
        } else {
            assert_eq!(b.page, a.page + 1);
            assert_eq!(b.y, 1.0);
        }
    }
    // 每页 36 行
    let on_first_page = layout.commands.iter().filter(|c| c.page == 1).count();
    assert_eq!(on_first_page, 36);
}

#[test]
fn test_wrap_preserves_indentation() {
    let conf = Conf::default();
    let layout = LayoutEngine::new(&conf).layout(&sample());
    let wrapped: Vec<&str> = layout
        .commands
        .iter()
        .map(|c| c.text.as_str())
        .filter(|t| t.trim_start().starts_with("Turn that") || t.trim_start().starts_with("street"))
        .collect();
    assert_eq!(
        wrapped,
        vec![
            "         Turn that thing off before it wakes the whole",
            "         street & the dog."
        ]
    );
    assert_eq!(layout.commands.len(), 32);
    assert_eq!(layout.page_count, 1);
    for cmd in &layout.commands {
        assert!(cmd.text.chars().count() <= 60);
        assert!(!cmd.text.is_empty());
    }
}

#[test]
fn test_tabs_expand_to_four_spaces() {
    let layout = LayoutEngine::new(&Conf::default()).layout("\tX");
    assert_eq!(layout.commands[0].text, "    X");
}

#[test]
fn test_tiny_page_never_emits_empty_pages() {
    let mut conf = Conf::default();
    conf.print_profile = PrintProfile {
        page_height: 2.1,
        margins: Margins {
            top: 1.0,
            bottom: 1.0,
            left: 1.5,
            right: 1.0,
        },
        ..PrintProfile::letter()
    };
    let layout = LayoutEngine::new(&conf).layout("a\nb\nc");
    assert_eq!(layout.page_count, 3);
    let pages: Vec<usize> = layout.commands.iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}
